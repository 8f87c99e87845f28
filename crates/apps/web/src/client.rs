use facility::{FacilityClient, FacilityQuery, SearchError};
use foundation::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;

/// `fetch`-backed client. An empty base issues same-origin requests.
#[derive(Debug, Clone, Default)]
pub struct GlooFacilityClient {
    base: String,
}

impl GlooFacilityClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl FacilityClient for GlooFacilityClient {
    fn fetch<'a>(&'a self, query: &'a FacilityQuery) -> LocalBoxFuture<'a, Result<Value, SearchError>> {
        Box::pin(async move {
            let url = format!("{}{}", self.base.trim_end_matches('/'), query.path());
            let params = query.params();
            let resp = Request::get(&url)
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .send()
                .await
                .map_err(|e| SearchError::transport(query.category, e.to_string()))?;
            if !resp.ok() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "{} answered {}",
                    url,
                    resp.status()
                )));
            }
            resp.json::<Value>()
                .await
                .map_err(|e| SearchError::transport(query.category, e.to_string()))
        })
    }
}
