//! Bindings to the subset of the kakao maps SDK the finder uses.
//!
//! Wrappers only; no state lives here.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = LatLng)]
    pub type KakaoLatLng;

    #[wasm_bindgen(constructor, js_class = "LatLng")]
    pub fn new(lat: f64, lng: f64) -> KakaoLatLng;
}

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    pub type KakaoMap;

    #[wasm_bindgen(constructor, js_class = "Map")]
    pub fn new(container: &web_sys::Element, options: &JsValue) -> KakaoMap;

    #[wasm_bindgen(method, js_class = "Map", js_name = panTo)]
    pub fn pan_to(this: &KakaoMap, at: &KakaoLatLng);

    #[wasm_bindgen(method, js_class = "Map", js_name = setCenter)]
    pub fn set_center(this: &KakaoMap, at: &KakaoLatLng);

    #[wasm_bindgen(method, js_class = "Map", js_name = setLevel)]
    pub fn set_level(this: &KakaoMap, level: u8);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Size)]
    pub type KakaoSize;

    #[wasm_bindgen(constructor, js_class = "Size")]
    pub fn new(width: u32, height: u32) -> KakaoSize;

    #[wasm_bindgen(js_name = MarkerImage)]
    pub type KakaoMarkerImage;

    #[wasm_bindgen(constructor, js_class = "MarkerImage")]
    pub fn new(src: &str, size: &KakaoSize) -> KakaoMarkerImage;
}

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Marker)]
    pub type KakaoMarker;

    /// `options`: `{ map, position, image, zIndex, title }`.
    #[wasm_bindgen(constructor, js_class = "Marker")]
    pub fn new(options: &JsValue) -> KakaoMarker;

    /// Pass `JsValue::NULL` to take the marker off its map.
    #[wasm_bindgen(method, js_class = "Marker", js_name = setMap)]
    pub fn set_map(this: &KakaoMarker, map: &JsValue);

    #[wasm_bindgen(method, js_class = "Marker", js_name = setImage)]
    pub fn set_image(this: &KakaoMarker, image: &KakaoMarkerImage);

    #[wasm_bindgen(method, js_class = "Marker", js_name = setZIndex)]
    pub fn set_z_index(this: &KakaoMarker, z_index: i32);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps", "event"])]
extern "C" {
    #[wasm_bindgen(js_name = addListener)]
    pub fn add_listener(target: &JsValue, kind: &str, handler: &JsValue);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps", "services"])]
extern "C" {
    #[wasm_bindgen(js_name = Places)]
    pub type KakaoPlaces;

    #[wasm_bindgen(constructor, js_class = "Places")]
    pub fn new() -> KakaoPlaces;

    /// `callback(data, status)`; `status` is `"OK"` on a match.
    #[wasm_bindgen(method, js_class = "Places", js_name = keywordSearch)]
    pub fn keyword_search(this: &KakaoPlaces, keyword: &str, callback: &JsValue, options: &JsValue);
}

#[wasm_bindgen(js_namespace = Swal)]
extern "C" {
    /// SweetAlert2 entry point.
    #[wasm_bindgen(js_name = fire)]
    pub fn swal_fire(options: &JsValue);
}
