use facility::LocationError;
use foundation::future::LocalBoxFuture;
use foundation::geo::LatLng;

/// Single-shot device position.
pub trait Geolocator {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<LatLng, LocationError>>;
}

/// Answers every request with the same result.
///
/// Stands in for a device on the command line and in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedLocation {
    result: Result<LatLng, LocationError>,
}

impl FixedLocation {
    pub fn at(position: LatLng) -> Self {
        Self {
            result: Ok(position),
        }
    }

    pub fn failing(err: LocationError) -> Self {
        Self { result: Err(err) }
    }
}

impl Geolocator for FixedLocation {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<LatLng, LocationError>> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}
