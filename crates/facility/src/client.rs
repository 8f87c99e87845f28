//! Outbound fetch seam.
//!
//! The session only needs "issue this query, give me the decoded body". The
//! native implementation uses reqwest; the browser build supplies its own.

use foundation::future::LocalBoxFuture;
use serde_json::Value;

use crate::error::SearchError;
use crate::query::FacilityQuery;

/// Issues exactly one request per call and decodes the JSON body.
///
/// Network and decode failures come back as `SearchError::Transport`. The
/// body is returned even for non-success statuses: the backend reports its
/// own failures as `{"error": ...}` objects, which the normalizer classifies.
pub trait FacilityClient {
    fn fetch<'a>(&'a self, query: &'a FacilityQuery) -> LocalBoxFuture<'a, Result<Value, SearchError>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpFacilityClient;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use foundation::future::LocalBoxFuture;
    use serde_json::Value;
    use tracing::{debug, warn};
    use url::Url;

    use super::FacilityClient;
    use crate::error::SearchError;
    use crate::query::FacilityQuery;

    /// reqwest-backed client rooted at the backend's base URL.
    #[derive(Debug, Clone)]
    pub struct HttpFacilityClient {
        base: Url,
        http: reqwest::Client,
    }

    impl HttpFacilityClient {
        pub fn new(base: Url) -> Self {
            Self::with_client(base, reqwest::Client::new())
        }

        pub fn with_client(mut base: Url, http: reqwest::Client) -> Self {
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            Self { base, http }
        }

        pub fn base(&self) -> &Url {
            &self.base
        }
    }

    impl FacilityClient for HttpFacilityClient {
        fn fetch<'a>(
            &'a self,
            query: &'a FacilityQuery,
        ) -> LocalBoxFuture<'a, Result<Value, SearchError>> {
            Box::pin(async move {
                let category = query.category;
                let url = query
                    .url(&self.base)
                    .map_err(|e| SearchError::transport(category, format!("bad url: {e}")))?;
                debug!(%url, "fetching facilities");

                let resp = self
                    .http
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| SearchError::transport(category, e.to_string()))?;
                let status = resp.status();
                if !status.is_success() {
                    warn!(%status, %category, "facility backend returned non-success status");
                }
                resp.json::<Value>()
                    .await
                    .map_err(|e| SearchError::transport(category, format!("decode: {e}")))
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::HttpFacilityClient;
        use url::Url;

        #[test]
        fn base_gains_trailing_slash() {
            let c = HttpFacilityClient::new(Url::parse("http://127.0.0.1:5000/app").expect("url"));
            assert_eq!(c.base().as_str(), "http://127.0.0.1:5000/app/");
        }

        #[test]
        fn root_base_is_kept() {
            let c = HttpFacilityClient::new(Url::parse("http://127.0.0.1:5000").expect("url"));
            assert_eq!(c.base().as_str(), "http://127.0.0.1:5000/");
        }
    }
}
