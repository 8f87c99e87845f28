use std::env;
use std::str::FromStr;

use foundation::geo::LatLng;
use serde::Deserialize;
use tracing::warn;

use crate::category::SearchCategory;

/// Tunables for a search page.
///
/// Defaults mirror the page controls' initial values; each field can be
/// overridden through `FINDER_*` environment variables or a JSON document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Radius used for general searches when the selector yields nothing usable.
    pub general_radius_km: f64,
    /// Radius used for pharmacy searches when the selector yields nothing usable.
    pub pharmacy_radius_km: f64,
    /// Map level for general/pharmacy results.
    pub near_level: u8,
    /// Map level for emergency results (sparser facilities, wider view).
    pub wide_level: u8,
    pub initial_lat: f64,
    pub initial_lng: f64,
    pub initial_level: u8,
    pub success_toast_ms: u32,
    /// Radius for the keyword place lookup behind detail links (metres).
    pub detail_radius_m: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            general_radius_km: 3.0,
            pharmacy_radius_km: 3.0,
            near_level: 4,
            wide_level: 7,
            initial_lat: 37.5665,
            initial_lng: 126.9780,
            initial_level: 5,
            success_toast_ms: 1700,
            detail_radius_m: 50,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            general_radius_km: env_var("FINDER_GENERAL_RADIUS_KM", d.general_radius_km),
            pharmacy_radius_km: env_var("FINDER_PHARMACY_RADIUS_KM", d.pharmacy_radius_km),
            near_level: env_var("FINDER_NEAR_LEVEL", d.near_level),
            wide_level: env_var("FINDER_WIDE_LEVEL", d.wide_level),
            success_toast_ms: env_var("FINDER_SUCCESS_TOAST_MS", d.success_toast_ms),
            ..d
        }
    }

    /// Radius used when the caller supplies none. `None` for categories that
    /// take no radius.
    pub fn default_radius_km(&self, category: SearchCategory) -> Option<f64> {
        match category {
            SearchCategory::General => Some(self.general_radius_km),
            SearchCategory::Pharmacy => Some(self.pharmacy_radius_km),
            SearchCategory::Emergency => None,
        }
    }

    pub fn level_for(&self, category: SearchCategory) -> u8 {
        match category {
            SearchCategory::Emergency => self.wide_level,
            SearchCategory::General | SearchCategory::Pharmacy => self.near_level,
        }
    }

    pub fn initial_center(&self) -> LatLng {
        LatLng::new(self.initial_lat, self.initial_lng)
    }
}

fn env_var<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring malformed {key}={raw:?}; using {default}");
            default
        }),
        Err(_) => default,
    }
}
