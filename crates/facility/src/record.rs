use foundation::geo::LatLng;
use serde::{Deserialize, Deserializer, Serialize};

/// One facility returned by a location search.
///
/// Identity is positional: the index in the received sequence is the join key
/// for the marker and list entry built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Kilometres from the search origin, as computed by the backend.
    pub distance: f64,
    /// Remaining emergency beds. Only present for the emergency category.
    ///
    /// Overloaded rooms report negative counts; those read as zero.
    #[serde(default, deserialize_with = "saturating_beds")]
    pub available: Option<u32>,
    /// Open/closed text reported for pharmacies.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub hours_summary: Option<String>,
}

impl FacilityRecord {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, distance: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
            address: None,
            phone: None,
            distance,
            available: None,
            status: None,
            hours_summary: None,
        }
    }

    pub fn with_available(mut self, available: u32) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// `true` when at least one emergency bed is free.
    pub fn has_beds(&self) -> bool {
        self.available.is_some_and(|n| n > 0)
    }
}

fn saturating_beds<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map(|n| n.clamp(0, i64::from(u32::MAX)) as u32))
}
