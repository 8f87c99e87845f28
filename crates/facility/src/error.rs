use thiserror::Error;

use crate::category::SearchCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search category: {0:?}")]
pub struct CategoryParseError(pub String);

/// Why the device position could not be acquired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The environment has no geolocation capability at all.
    #[error("geolocation is not supported")]
    Unsupported,
    /// The capability exists but the single-shot request failed or was denied.
    #[error("position request failed: {0}")]
    Failed(String),
}

/// Terminal failure of one search session.
///
/// Every variant ends the session without touching the current collections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("location unavailable: {0}")]
    LocationUnavailable(#[from] LocationError),

    #[error("no {category} results")]
    EmptyResult {
        category: SearchCategory,
        radius_km: Option<f64>,
    },

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("{category} transport error: {reason}")]
    Transport {
        category: SearchCategory,
        reason: String,
    },
}

impl SearchError {
    pub fn transport(category: SearchCategory, reason: impl Into<String>) -> Self {
        SearchError::Transport {
            category,
            reason: reason.into(),
        }
    }

    /// Text presented in the page alert, if this failure raises one.
    ///
    /// Location failures that merely failed (rather than being unsupported)
    /// are reported on the status line only.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            SearchError::LocationUnavailable(LocationError::Unsupported) => {
                Some("위치 정보를 사용할 수 없습니다.".to_string())
            }
            SearchError::LocationUnavailable(LocationError::Failed(_)) => None,
            SearchError::EmptyResult {
                category,
                radius_km,
            } => Some(match category {
                SearchCategory::General => "주변에 병원 검색 결과가 없습니다.".to_string(),
                SearchCategory::Pharmacy => match radius_km {
                    Some(r) => format!("주변 {r}km 이내에 약국 검색 결과가 없습니다."),
                    None => "주변에 약국 검색 결과가 없습니다.".to_string(),
                },
                SearchCategory::Emergency => "주변에 응급실 데이터가 없습니다.".to_string(),
            }),
            SearchError::Upstream(message) => Some(format!("API 오류: {message}")),
            SearchError::Transport { category, .. } => Some(
                match category {
                    SearchCategory::General => "병원 데이터 서버 오류",
                    SearchCategory::Pharmacy => "약국 데이터 서버 오류",
                    SearchCategory::Emergency => "응급실 데이터 통신 실패",
                }
                .to_string(),
            ),
        }
    }

    /// Text left on the status line after the failure.
    pub fn status_message(&self) -> &'static str {
        match self {
            SearchError::LocationUnavailable(_) => "위치 확보 실패",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LocationError, SearchError};
    use crate::category::SearchCategory;

    #[test]
    fn empty_result_messages_are_category_specific() {
        let general = SearchError::EmptyResult {
            category: SearchCategory::General,
            radius_km: Some(3.0),
        };
        let pharmacy = SearchError::EmptyResult {
            category: SearchCategory::Pharmacy,
            radius_km: Some(1.5),
        };
        let emergency = SearchError::EmptyResult {
            category: SearchCategory::Emergency,
            radius_km: None,
        };
        assert_eq!(general.alert_message().as_deref(), Some("주변에 병원 검색 결과가 없습니다."));
        assert_eq!(
            pharmacy.alert_message().as_deref(),
            Some("주변 1.5km 이내에 약국 검색 결과가 없습니다.")
        );
        assert_eq!(emergency.alert_message().as_deref(), Some("주변에 응급실 데이터가 없습니다."));
    }

    #[test]
    fn upstream_text_is_surfaced_verbatim() {
        let err = SearchError::Upstream("SERVICE KEY IS NOT REGISTERED".into());
        assert_eq!(
            err.alert_message().as_deref(),
            Some("API 오류: SERVICE KEY IS NOT REGISTERED")
        );
    }

    #[test]
    fn transport_messages_are_generic_per_category() {
        let err = SearchError::transport(SearchCategory::Pharmacy, "connection refused");
        assert_eq!(err.alert_message().as_deref(), Some("약국 데이터 서버 오류"));
        assert_eq!(err.status_message(), "");
    }

    #[test]
    fn failed_location_reports_on_status_line_only() {
        let err: SearchError = LocationError::Failed("denied".into()).into();
        assert_eq!(err.alert_message(), None);
        assert_eq!(err.status_message(), "위치 확보 실패");

        let unsupported: SearchError = LocationError::Unsupported.into();
        assert!(unsupported.alert_message().is_some());
        assert_eq!(unsupported.status_message(), "위치 확보 실패");
    }
}
