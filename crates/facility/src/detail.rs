use foundation::geo::LatLng;
use url::Url;

const PLACE_BASE: &str = "https://place.map.kakao.com/";
const SEARCH_BASE: &str = "https://map.kakao.com/link/search/";

/// Input for the map SDK's keyword place lookup behind a detail link.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailQuery {
    pub name: String,
    pub at: LatLng,
    pub radius_m: u32,
}

impl DetailQuery {
    pub fn new(name: impl Into<String>, at: LatLng, radius_m: u32) -> Self {
        Self {
            name: name.into(),
            at,
            radius_m,
        }
    }

    /// Link to open once the lookup finished.
    ///
    /// `first_match` is the place id of the lookup's first hit, if any.
    pub fn resolve(&self, first_match: Option<&str>) -> String {
        match first_match.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => place_url(id).unwrap_or_else(|| format!("{PLACE_BASE}{id}")),
            None => search_url(&self.name).unwrap_or_else(|| format!("{SEARCH_BASE}{}", self.name)),
        }
    }
}

fn place_url(id: &str) -> Option<String> {
    let mut url = Url::parse(PLACE_BASE).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(id);
    Some(url.into())
}

fn search_url(name: &str) -> Option<String> {
    let mut url = Url::parse(SEARCH_BASE).ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(name);
    Some(url.into())
}

#[cfg(test)]
mod tests {
    use super::DetailQuery;
    use foundation::geo::LatLng;

    fn q(name: &str) -> DetailQuery {
        DetailQuery::new(name, LatLng::new(37.5, 127.0), 50)
    }

    #[test]
    fn matched_lookup_links_to_place_page() {
        assert_eq!(q("A병원").resolve(Some("12345")), "https://place.map.kakao.com/12345");
    }

    #[test]
    fn missing_match_falls_back_to_search_link() {
        assert_eq!(
            q("A 병원").resolve(None),
            "https://map.kakao.com/link/search/A%20%EB%B3%91%EC%9B%90"
        );
        assert_eq!(q("B").resolve(Some("  ")), "https://map.kakao.com/link/search/B");
    }
}
