//! Tab record: one browser tab as read from the input array.
//!
//! Only `title` and `url` are inspected. Every other field is kept as-is so the
//! tab can be re-emitted verbatim under its category.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A browser tab record. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tab(Map<String, Value>);

impl Tab {
    /// Builds a minimal `{title, url}` record.
    pub fn new(title: &str, url: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        fields.insert("url".to_string(), Value::String(url.to_string()));
        Self(fields)
    }

    /// Tab title; empty when absent or not a string.
    pub fn title(&self) -> &str {
        self.text_field("title")
    }

    /// Tab URL; empty when absent or not a string.
    pub fn url(&self) -> &str {
        self.text_field("url")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    fn text_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}
