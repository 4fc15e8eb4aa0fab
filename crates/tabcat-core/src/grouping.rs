//! Batch grouping: classify every tab of an input array and bucket the tabs by
//! category.
//!
//! Categories come out in ascending name order; within a category, tabs keep
//! their input order. Input that is not a JSON array of objects yields the
//! fixed error object instead of any partial grouping.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::classifier::Classifier;
use crate::tab::Tab;

/// Message of the error object emitted for unusable input.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON input";

#[derive(Debug, Error)]
pub enum InputError {
    /// Not JSON, or not an array of objects.
    #[error("input is not a JSON array of tab objects")]
    Json(#[from] serde_json::Error),
}

/// Parses the raw input into tab records.
pub fn parse_tabs(input: &[u8]) -> Result<Vec<Tab>, InputError> {
    Ok(serde_json::from_slice(input)?)
}

/// Tabs bucketed by category name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryGroups(BTreeMap<String, Vec<Tab>>);

impl CategoryGroups {
    pub fn push(&mut self, category: &str, tab: Tab) {
        self.0.entry(category.to_string()).or_default().push(tab);
    }

    pub fn get(&self, category: &str) -> Option<&[Tab]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// Category names, ascending.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of non-empty categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total tabs across all categories.
    pub fn total_tabs(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// JSON object keyed by category, tabs re-emitted verbatim.
    pub fn into_json(self) -> Value {
        let map: Map<String, Value> = self
            .0
            .into_iter()
            .map(|(category, tabs)| {
                let tabs = tabs
                    .into_iter()
                    .map(|t| Value::Object(t.into_fields()))
                    .collect();
                (category, Value::Array(tabs))
            })
            .collect();
        Value::Object(map)
    }
}

/// Classifies each tab and appends it to its category.
pub fn group_tabs(classifier: &Classifier, tabs: Vec<Tab>) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for tab in tabs {
        let category = classifier.classify(&tab);
        groups.push(category, tab);
    }
    groups
}

/// The fixed error object for unusable input.
pub fn invalid_input_value() -> Value {
    json!({ "error": INVALID_INPUT_MESSAGE })
}

/// Raw input in, output document out: the category grouping, or the error
/// object when the input cannot be read as tab records.
pub fn categorize(classifier: &Classifier, input: &[u8]) -> Value {
    match parse_tabs(input) {
        Ok(tabs) => {
            let count = tabs.len();
            let groups = group_tabs(classifier, tabs);
            tracing::info!(
                "categorized {} tabs into {} categories",
                count,
                groups.len()
            );
            groups.into_json()
        }
        Err(err) => {
            tracing::warn!("rejecting input: {:#}", anyhow::Error::from(err));
            invalid_input_value()
        }
    }
}
