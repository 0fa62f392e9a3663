//! Content policies
//!
//! A content policy is a bag of properties attached to a page's content resource by the
//! host. The root resolver reads the `isRoot` flag from it.

use crate::tree::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Content policy attached to a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentPolicy {
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl ContentPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Whether the property exists and is boolean `true`.
    ///
    /// Missing properties and non-boolean values count as `false`.
    pub fn property_is_true(&self, name: &str) -> bool {
        matches!(self.properties.get(name), Some(Value::Bool(true)))
    }
}

/// Policy provider interface
pub trait PolicyProvider: Send + Sync {
    /// Content policy of the page, if one is assigned
    fn policy(&self, page: &Page) -> Option<ContentPolicy>;

    /// Boolean policy flag; `false` when the page has no policy or the flag is unset
    fn policy_flag(&self, page: &Page, name: &str) -> bool {
        self.policy(page)
            .map(|policy| policy.property_is_true(name))
            .unwrap_or(false)
    }
}
