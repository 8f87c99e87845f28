use foundation::geo::LatLng;
use js_sys::{Object, Reflect};
use scene::{MapSurface, MarkerImage, MarkerSpec, MarkerVisual};
use wasm_bindgen::prelude::*;

use crate::kakao::{KakaoLatLng, KakaoMap, KakaoMarker, KakaoMarkerImage, KakaoSize, add_listener};

fn kakao_lat_lng(at: LatLng) -> KakaoLatLng {
    KakaoLatLng::new(at.lat, at.lng)
}

fn kakao_image(image: MarkerImage) -> KakaoMarkerImage {
    let spec = image.spec();
    KakaoMarkerImage::new(spec.url, &KakaoSize::new(spec.width, spec.height))
}

/// A marker on the page plus the click handler keeping it wired to selection.
pub struct PageMarker {
    marker: KakaoMarker,
    _on_click: Option<Closure<dyn FnMut()>>,
}

/// [`MapSurface`] backed by a kakao map.
pub struct KakaoMapSurface {
    map: KakaoMap,
}

impl KakaoMapSurface {
    pub fn mount(container: &web_sys::Element, center: LatLng, level: u8) -> Result<Self, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"center".into(), &kakao_lat_lng(center))?;
        Reflect::set(&options, &"level".into(), &JsValue::from(level))?;
        Ok(Self {
            map: KakaoMap::new(container, &options),
        })
    }

    fn marker_options(&self, spec: &MarkerSpec) -> Result<Object, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"map".into(), &self.map)?;
        Reflect::set(&options, &"position".into(), &kakao_lat_lng(spec.position))?;
        Reflect::set(&options, &"image".into(), &kakao_image(spec.visual.image))?;
        Reflect::set(&options, &"zIndex".into(), &JsValue::from(spec.visual.z_index))?;
        Reflect::set(&options, &"title".into(), &JsValue::from_str(&spec.title))?;
        Ok(options)
    }
}

impl MapSurface for KakaoMapSurface {
    type Marker = PageMarker;

    fn add_marker(&mut self, spec: &MarkerSpec) -> PageMarker {
        let options = self.marker_options(spec).unwrap_or_else(|err| {
            crate::log_error("marker options", &err);
            Object::new()
        });
        let marker = KakaoMarker::new(&options);

        let on_click = spec.key.map(|key| {
            let handler = Closure::<dyn FnMut()>::new(move || crate::select_entry(key));
            add_listener(&marker, "click", handler.as_ref());
            handler
        });
        PageMarker {
            marker,
            _on_click: on_click,
        }
    }

    fn remove_marker(&mut self, marker: PageMarker) {
        marker.marker.set_map(&JsValue::NULL);
    }

    fn restyle_marker(&mut self, marker: &PageMarker, visual: MarkerVisual) {
        marker.marker.set_image(&kakao_image(visual.image));
        marker.marker.set_z_index(visual.z_index);
    }

    fn pan_to(&mut self, at: LatLng) {
        self.map.pan_to(&kakao_lat_lng(at));
    }

    fn set_view(&mut self, center: LatLng, level: u8) {
        self.map.set_center(&kakao_lat_lng(center));
        self.map.set_level(level);
    }
}
