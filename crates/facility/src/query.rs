use foundation::geo::LatLng;
use url::Url;

use crate::category::SearchCategory;
use crate::config::SearchConfig;

/// The single outbound request a session issues.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityQuery {
    pub category: SearchCategory,
    pub origin: LatLng,
    /// Present (possibly empty) for general searches only.
    pub keyword: Option<String>,
    /// Kilometres. Absent for emergency searches.
    pub radius_km: Option<f64>,
}

impl FacilityQuery {
    pub fn path(&self) -> &'static str {
        self.category.path()
    }

    /// Query-string parameters in wire order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lat", self.origin.lat.to_string()),
            ("lon", self.origin.lng.to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(radius) = self.radius_km {
            params.push(("radius", radius.to_string()));
        }
        params
    }

    /// Absolute request URL against `base` (scheme + host, optional prefix).
    pub fn url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join(self.path().trim_start_matches('/'))?;
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.params().iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }
}

/// Maps a requested category to its request descriptor.
#[derive(Debug, Clone, Default)]
pub struct FacilityQueryRouter {
    config: SearchConfig,
}

impl FacilityQueryRouter {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn route(
        &self,
        category: SearchCategory,
        origin: LatLng,
        keyword: Option<&str>,
        radius_km: Option<f64>,
    ) -> FacilityQuery {
        let keyword = category
            .takes_keyword()
            .then(|| keyword.map(str::trim).unwrap_or_default().to_string());
        let radius_km = if category.takes_radius() {
            radius_km
                .filter(|r| r.is_finite() && *r > 0.0)
                .or_else(|| self.config.default_radius_km(category))
        } else {
            None
        };
        FacilityQuery {
            category,
            origin,
            keyword,
            radius_km,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FacilityQueryRouter;
    use crate::category::SearchCategory;
    use foundation::geo::LatLng;
    use pretty_assertions::assert_eq;
    use url::Url;

    const ORIGIN: LatLng = LatLng::new(37.50, 127.03);

    #[test]
    fn general_keeps_empty_keyword_and_given_radius() {
        let q = FacilityQueryRouter::default().route(
            SearchCategory::General,
            ORIGIN,
            Some(""),
            Some(3000.0),
        );
        assert_eq!(q.path(), "/api/hospitals");
        assert_eq!(
            q.params(),
            vec![
                ("lat", "37.5".to_string()),
                ("lon", "127.03".to_string()),
                ("keyword", "".to_string()),
                ("radius", "3000".to_string()),
            ]
        );
    }

    #[test]
    fn general_without_radius_falls_back_to_default() {
        let q = FacilityQueryRouter::default().route(
            SearchCategory::General,
            ORIGIN,
            Some("  내과 "),
            None,
        );
        assert_eq!(q.keyword.as_deref(), Some("내과"));
        assert_eq!(q.radius_km, Some(3.0));
    }

    #[test]
    fn unusable_radius_is_replaced() {
        let router = FacilityQueryRouter::default();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let q = router.route(SearchCategory::Pharmacy, ORIGIN, None, Some(bad));
            assert_eq!(q.radius_km, Some(3.0));
        }
    }

    #[test]
    fn pharmacy_drops_keyword() {
        let q = FacilityQueryRouter::default().route(
            SearchCategory::Pharmacy,
            ORIGIN,
            Some("ignored"),
            Some(1.0),
        );
        assert_eq!(q.path(), "/api/pharmacy");
        assert_eq!(
            q.params(),
            vec![
                ("lat", "37.5".to_string()),
                ("lon", "127.03".to_string()),
                ("radius", "1".to_string()),
            ]
        );
    }

    #[test]
    fn emergency_takes_location_only() {
        let q = FacilityQueryRouter::default().route(
            SearchCategory::Emergency,
            ORIGIN,
            Some("x"),
            Some(5.0),
        );
        assert_eq!(q.keyword, None);
        assert_eq!(q.radius_km, None);
        assert_eq!(
            q.params(),
            vec![("lat", "37.5".to_string()), ("lon", "127.03".to_string())]
        );
    }

    #[test]
    fn url_encodes_keyword_under_base_prefix() {
        let base = Url::parse("http://localhost:5000/app/").expect("base");
        let q = FacilityQueryRouter::default().route(
            SearchCategory::General,
            ORIGIN,
            Some("서울 내과"),
            Some(2.0),
        );
        let url = q.url(&base).expect("url");
        assert_eq!(url.path(), "/app/api/hospitals");
        let keyword = url
            .query_pairs()
            .find(|(k, _)| k == "keyword")
            .map(|(_, v)| v.into_owned());
        assert_eq!(keyword.as_deref(), Some("서울 내과"));
    }
}
