use facility::{FacilityRecord, SearchCategory};

/// Stacking order of general and pharmacy markers.
pub const Z_FACILITY: i32 = 1;
/// Stacking order of emergency markers.
pub const Z_EMERGENCY: i32 = 2;
/// Reserved for the selected marker and the user-location marker.
pub const Z_TOP: i32 = 3;

pub const USER_LOCATION_TITLE: &str = "내 위치";

/// Marker image variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MarkerImage {
    Hospital,
    Pharmacy,
    BedsAvailable,
    BedsFull,
    Selected,
    UserLocation,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
}

impl ImageSpec {
    pub const fn new(url: &'static str, width: u32, height: u32) -> Self {
        Self { url, width, height }
    }
}

const GREEN_PIN: &str = "http://maps.google.com/mapfiles/ms/icons/green-dot.png";
const RED_PIN: &str = "http://maps.google.com/mapfiles/ms/icons/red-dot.png";
const STAR: &str = "https://t1.daumcdn.net/localimg/localimages/07/mapapidoc/markerStar.png";
const SELECTED: &str = "https://t1.daumcdn.net/localimg/localimages/07/mapapidoc/marker_red.png";
const USER: &str = "https://t1.daumcdn.net/localimg/localimages/07/2018/pc/img/marker_spot.png";

impl MarkerImage {
    pub const fn spec(self) -> ImageSpec {
        match self {
            MarkerImage::Hospital => ImageSpec::new(GREEN_PIN, 24, 35),
            MarkerImage::Pharmacy => ImageSpec::new(STAR, 24, 35),
            MarkerImage::BedsAvailable => ImageSpec::new(GREEN_PIN, 32, 32),
            MarkerImage::BedsFull => ImageSpec::new(RED_PIN, 32, 32),
            MarkerImage::Selected => ImageSpec::new(SELECTED, 40, 55),
            MarkerImage::UserLocation => ImageSpec::new(USER, 30, 40),
        }
    }
}

/// Image plus stacking order of one marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MarkerVisual {
    pub image: MarkerImage,
    pub z_index: i32,
}

impl MarkerVisual {
    pub const SELECTED: MarkerVisual = MarkerVisual::new(MarkerImage::Selected, Z_TOP);
    pub const USER_LOCATION: MarkerVisual = MarkerVisual::new(MarkerImage::UserLocation, Z_TOP);

    pub const fn new(image: MarkerImage, z_index: i32) -> Self {
        Self { image, z_index }
    }

    /// Unselected look of a facility marker.
    pub fn normal(category: SearchCategory, record: &FacilityRecord) -> Self {
        match category {
            SearchCategory::General => Self::new(MarkerImage::Hospital, Z_FACILITY),
            SearchCategory::Pharmacy => Self::new(MarkerImage::Pharmacy, Z_FACILITY),
            SearchCategory::Emergency if record.has_beds() => {
                Self::new(MarkerImage::BedsAvailable, Z_EMERGENCY)
            }
            SearchCategory::Emergency => Self::new(MarkerImage::BedsFull, Z_EMERGENCY),
        }
    }
}

/// Hover title of a facility marker.
pub fn marker_title(category: SearchCategory, record: &FacilityRecord) -> String {
    match (category, record.available) {
        (SearchCategory::Emergency, Some(beds)) => format!("{} ({beds})", record.name),
        _ => record.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{MarkerImage, MarkerVisual, Z_EMERGENCY, Z_FACILITY, Z_TOP, marker_title};
    use facility::{FacilityRecord, SearchCategory};

    fn rec() -> FacilityRecord {
        FacilityRecord::new("센터", 37.5, 127.0, 1.0)
    }

    #[test]
    fn selected_sits_above_every_normal_visual() {
        for category in SearchCategory::ALL {
            for beds in [0, 3] {
                let normal = MarkerVisual::normal(category, &rec().with_available(beds));
                assert!(MarkerVisual::SELECTED.z_index > normal.z_index);
            }
        }
        assert_eq!(MarkerVisual::USER_LOCATION.z_index, Z_TOP);
    }

    #[test]
    fn emergency_normal_follows_bed_availability() {
        let full = MarkerVisual::normal(SearchCategory::Emergency, &rec().with_available(0));
        let free = MarkerVisual::normal(SearchCategory::Emergency, &rec().with_available(2));
        assert_eq!(full, MarkerVisual::new(MarkerImage::BedsFull, Z_EMERGENCY));
        assert_eq!(free, MarkerVisual::new(MarkerImage::BedsAvailable, Z_EMERGENCY));
    }

    #[test]
    fn general_and_pharmacy_sit_at_facility_level() {
        assert_eq!(MarkerVisual::normal(SearchCategory::General, &rec()).z_index, Z_FACILITY);
        assert_eq!(
            MarkerVisual::normal(SearchCategory::Pharmacy, &rec()).image,
            MarkerImage::Pharmacy
        );
    }

    #[test]
    fn emergency_titles_carry_bed_count() {
        assert_eq!(marker_title(SearchCategory::Emergency, &rec().with_available(5)), "센터 (5)");
        assert_eq!(marker_title(SearchCategory::General, &rec()), "센터");
    }
}
