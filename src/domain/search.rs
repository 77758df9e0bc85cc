//! Search payload types owned by the transport boundary.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque record returned by the search API.
///
/// The record is never interpreted; it is carried through to the templates
/// exactly as the API produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultItem(Value);

impl ResultItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Looks up a top-level field when the record is a JSON object.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|object| object.get(key))
    }
}

/// Decoded body of a successful search call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResponse {
    /// Ordered results; empty when the API omitted the field.
    pub results: Vec<ResultItem>,
}

impl SearchResponse {
    pub fn new(results: Vec<ResultItem>) -> Self {
        Self { results }
    }

    /// Decodes a raw API body.
    ///
    /// The body must be a JSON object. A missing or `null` `results` field
    /// yields an empty result set; any other non-array `results` is rejected.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let Value::Object(mut object) = serde_json::from_str::<Value>(body)? else {
            return Err(serde_json::Error::custom("search response is not a JSON object"));
        };

        let results = match object.remove("results") {
            None | Some(Value::Null) => Vec::new(),
            Some(results) => serde_json::from_value(results)?,
        };

        Ok(Self { results })
    }
}
