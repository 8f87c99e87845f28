use serde_json::Value;
use tracing::debug;

use crate::category::SearchCategory;
use crate::error::SearchError;
use crate::query::FacilityQuery;
use crate::record::FacilityRecord;

/// Validates a decoded response and turns it into the ordered record sequence.
///
/// The order of the returned records is exactly the order received; it is
/// the index ordering every later surface relies on.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultNormalizer;

impl ResultNormalizer {
    pub fn normalize(
        &self,
        query: &FacilityQuery,
        raw: Value,
    ) -> Result<Vec<FacilityRecord>, SearchError> {
        let category = query.category;
        let empty = || SearchError::EmptyResult {
            category,
            radius_km: query.radius_km,
        };

        let items = match raw {
            Value::Null => return Err(empty()),
            Value::Array(items) => items,
            Value::Object(map) => {
                return Err(match map.get("error") {
                    Some(err) if category == SearchCategory::Emergency => {
                        SearchError::Upstream(error_text(err))
                    }
                    Some(err) => SearchError::transport(category, error_text(err)),
                    None => SearchError::transport(category, "expected a JSON array"),
                });
            }
            other => {
                return Err(SearchError::transport(
                    category,
                    format!("expected a JSON array, got {other}"),
                ));
            }
        };

        if items.is_empty() {
            return Err(empty());
        }

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record: FacilityRecord = serde_json::from_value(item).map_err(|e| {
                SearchError::transport(category, format!("malformed record #{index}: {e}"))
            })?;
            if !record.position().is_finite() {
                return Err(SearchError::transport(
                    category,
                    format!("record #{index} has non-finite coordinates"),
                ));
            }
            if category == SearchCategory::Emergency && record.available.is_none() {
                return Err(SearchError::transport(
                    category,
                    format!("emergency record #{index} lacks a bed count"),
                ));
            }
            records.push(record);
        }

        debug!(%category, count = records.len(), "normalized facility response");
        Ok(records)
    }
}

fn error_text(err: &Value) -> String {
    match err {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
