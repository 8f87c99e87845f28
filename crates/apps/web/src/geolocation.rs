use facility::LocationError;
use foundation::future::LocalBoxFuture;
use foundation::geo::LatLng;
use js_sys::{Promise, Reflect};
use runtime::Geolocator;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Single-shot `navigator.geolocation` lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserGeolocator;

impl Geolocator for BrowserGeolocator {
    fn current_position(&self) -> LocalBoxFuture<'_, Result<LatLng, LocationError>> {
        Box::pin(current_position())
    }
}

async fn current_position() -> Result<LatLng, LocationError> {
    let window = web_sys::window().ok_or(LocationError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| LocationError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position = JsFuture::from(promise)
        .await
        .map_err(|err| LocationError::Failed(describe(&err)))?;

    let coords = field(&position, "coords")?;
    let lat = number(&coords, "latitude")?;
    let lng = number(&coords, "longitude")?;
    Ok(LatLng::new(lat, lng))
}

fn field(value: &JsValue, name: &str) -> Result<JsValue, LocationError> {
    Reflect::get(value, &JsValue::from_str(name)).map_err(|err| LocationError::Failed(describe(&err)))
}

fn number(value: &JsValue, name: &str) -> Result<f64, LocationError> {
    field(value, name)?
        .as_f64()
        .ok_or_else(|| LocationError::Failed(format!("position has no {name}")))
}

/// Best-effort text for a rejected promise (`GeolocationPositionError` or any thrown value).
fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
