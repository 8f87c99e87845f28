//! Browser build of the finder page.
//!
//! Expects the page to provide `#map`, `#result-list`, `#status`, a radius
//! `<select id="radius">` (kilometres), a `<input id="keyword">` and one
//! `#btn-<category>` button per category, plus the kakao maps SDK (with the
//! `services` library) and SweetAlert2.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use console_error_panic_hook::set_once;
use facility::{SearchCategory, SearchConfig};
use runtime::{Finder, SearchParams, SessionOutcome, run_search};
use scene::{ActionKind, EntryAction, EntryKey};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement, Window};

mod client;
mod geolocation;
mod kakao;
mod list;
mod map;
mod notify;

use client::GlooFacilityClient;
use geolocation::BrowserGeolocator;
use kakao::KakaoPlaces;
use list::DomListSurface;
use map::KakaoMapSurface;
use notify::PageNotifier;

type PageFinder = Finder<KakaoMapSurface, DomListSurface, PageNotifier>;

struct Page {
    finder: Rc<RefCell<PageFinder>>,
    client: Rc<GlooFacilityClient>,
    document: Document,
}

// Guard to prevent double-initialization of global state (relevant during hot reload).
static INITIALIZED: AtomicBool = AtomicBool::new(false);

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

pub(crate) fn log_error(context: &str, err: &JsValue) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err:?}")));
}

fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

fn with_page<R>(f: impl FnOnce(&Page) -> R) -> Option<R> {
    PAGE.with(|page| page.borrow().as_ref().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Mounts the map and list and shows the initial view.
///
/// `config_json` is an optional JSON `SearchConfig`; missing fields keep their
/// defaults. `api_base` prefixes every request path (empty for same-origin).
#[wasm_bindgen]
pub fn init(config_json: Option<String>, api_base: Option<String>) -> Result<(), JsValue> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let config = match config_json.as_deref().map(serde_json::from_str::<SearchConfig>) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log(&format!("ignoring malformed config: {err}"));
            SearchConfig::default()
        }
        None => SearchConfig::default(),
    };

    let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let container = document
        .get_element_by_id("map")
        .ok_or_else(|| JsValue::from_str("missing #map"))?;
    let list = document
        .get_element_by_id("result-list")
        .ok_or_else(|| JsValue::from_str("missing #result-list"))?;

    let map = KakaoMapSurface::mount(&container, config.initial_center(), config.initial_level)?;
    let list = DomListSurface::new(document.clone(), list);
    let notifier = PageNotifier::new(window, document.clone());
    let mut finder = Finder::new(map, list, notifier, config);
    finder.show_initial_view();

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            finder: Rc::new(RefCell::new(finder)),
            client: Rc::new(GlooFacilityClient::new(api_base.unwrap_or_default())),
            document,
        });
    });
    Ok(())
}

fn read_params(document: &Document, category: SearchCategory) -> SearchParams {
    let mut params = SearchParams::new(category);
    if category.takes_keyword() {
        if let Some(input) = document
            .get_element_by_id("keyword")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            params = params.with_keyword(input.value());
        }
    }
    if category.takes_radius() {
        let radius = document
            .get_element_by_id("radius")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .and_then(|select| select.value().trim().parse::<f64>().ok());
        if let Some(radius) = radius {
            params = params.with_radius_km(radius);
        }
    }
    params
}

/// Category button handler.
#[wasm_bindgen]
pub fn search(category: &str) -> Result<(), JsValue> {
    let category: SearchCategory = category
        .parse()
        .map_err(|err: facility::CategoryParseError| JsValue::from_str(&err.to_string()))?;
    let Some((finder, client, params)) = with_page(|page| {
        (
            Rc::clone(&page.finder),
            Rc::clone(&page.client),
            read_params(&page.document, category),
        )
    }) else {
        return Err(JsValue::from_str("init() has not run"));
    };

    spawn_local(async move {
        let outcome = run_search(&*finder, &BrowserGeolocator, &*client, params).await;
        match outcome {
            SessionOutcome::Rebuilt { count, .. } => log(&format!("{category}: {count} results")),
            SessionOutcome::Failed(err) => log(&format!("{category} search failed: {err}")),
            SessionOutcome::Superseded { .. } => {}
        }
    });
    Ok(())
}

/// Marker and list-body clicks land here.
pub(crate) fn select_entry(key: EntryKey) {
    let Some(finder) = with_page(|page| Rc::clone(&page.finder)) else {
        return;
    };
    match finder.try_borrow_mut() {
        Ok(mut finder) => {
            finder.select(key);
        }
        Err(_) => log("selection ignored while the page is busy"),
    };
}

/// Action controls inside list items land here; selection is untouched.
pub(crate) fn activate_action(key: EntryKey, kind: ActionKind) {
    let Some(action) = with_page(|page| page.finder.try_borrow().ok()?.activate(key, kind)).flatten()
    else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    match action {
        EntryAction::Call { href, .. } => {
            if let Err(err) = window.location().set_href(&href) {
                log_error("call", &err);
            }
        }
        EntryAction::Detail { query, .. } => {
            if let Err(err) = open_detail(window, query) {
                log_error("detail lookup", &err);
            }
        }
    }
}

/// Looks the facility up by name near its position and opens the best link.
fn open_detail(window: Window, query: facility::DetailQuery) -> Result<(), JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &"location".into(),
        &kakao::KakaoLatLng::new(query.at.lat, query.at.lng),
    )?;
    js_sys::Reflect::set(&options, &"radius".into(), &JsValue::from(query.radius_m))?;

    let name = query.name.clone();
    let callback = Closure::once_into_js(move |data: JsValue, status: JsValue| {
        let first_id = (status.as_string().as_deref() == Some("OK"))
            .then(|| js_sys::Reflect::get(&data, &JsValue::from(0)).ok())
            .flatten()
            .and_then(|first| js_sys::Reflect::get(&first, &"id".into()).ok())
            .and_then(|id| id.as_string());
        let url = query.resolve(first_id.as_deref());
        if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
            log_error("open detail", &err);
        }
    });
    KakaoPlaces::new().keyword_search(&name, &callback, &options);
    Ok(())
}
