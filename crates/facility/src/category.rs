use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CategoryParseError;

/// The search type selected by the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    General,
    Pharmacy,
    Emergency,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 3] = [
        SearchCategory::General,
        SearchCategory::Pharmacy,
        SearchCategory::Emergency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchCategory::General => "general",
            SearchCategory::Pharmacy => "pharmacy",
            SearchCategory::Emergency => "emergency",
        }
    }

    /// Backend path for this category.
    pub fn path(self) -> &'static str {
        match self {
            SearchCategory::General => "/api/hospitals",
            SearchCategory::Pharmacy => "/api/pharmacy",
            SearchCategory::Emergency => "/api/emergency",
        }
    }

    /// Icon prefixed to list entry names.
    pub fn icon(self) -> &'static str {
        match self {
            SearchCategory::General => "🏥",
            SearchCategory::Pharmacy => "💊",
            SearchCategory::Emergency => "🚨",
        }
    }

    /// Status line shown while a session is in flight.
    pub fn searching_status(self) -> &'static str {
        match self {
            SearchCategory::General => "🏥 병원 조회 중...",
            SearchCategory::Pharmacy => "💊 주변 실시간 약국 찾는 중...",
            SearchCategory::Emergency => "🚨 실시간 병상 조회 중...",
        }
    }

    pub fn takes_keyword(self) -> bool {
        matches!(self, SearchCategory::General)
    }

    pub fn takes_radius(self) -> bool {
        !matches!(self, SearchCategory::Emergency)
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "hospital" | "hospitals" => Ok(SearchCategory::General),
            "pharmacy" => Ok(SearchCategory::Pharmacy),
            "emergency" | "er" => Ok(SearchCategory::Emergency),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}
