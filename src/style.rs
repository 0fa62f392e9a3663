//! Style (template policy) settings
//!
//! Styles carry the export configuration of a page: traversal depth, structure
//! patterns and the style-level root flag.

use crate::tree::Page;
use crate::types::{PN_IS_ROOT, PN_STRUCTURE_DEPTH};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Style/config provider interface
pub trait Style {
    fn integer(&self, name: &str) -> Option<i64>;
    fn string(&self, name: &str) -> Option<String>;
    fn boolean(&self, name: &str) -> Option<bool>;
}

/// Per-page style lookup
pub trait StyleSource: Send + Sync {
    fn style(&self, page: &Page) -> Option<StyleProperties>;
}

/// Map-backed style settings
///
/// Lookups are lenient: numeric strings read as integers, `"true"`/`"false"` read as
/// booleans, and numbers read as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleProperties(BTreeMap<String, Value>);

impl StyleProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Style for StyleProperties {
    fn integer(&self, name: &str) -> Option<i64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn string(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn boolean(&self, name: &str) -> Option<bool> {
        match self.0.get(name)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Configured structure depth. Defaults to 0 (no descendants) when the style is
/// missing, the setting is absent, or it cannot be read as an `i32`.
pub fn structure_depth(style: Option<&dyn Style>) -> i32 {
    let Some(raw) = style.and_then(|s| s.integer(PN_STRUCTURE_DEPTH)) else {
        return 0;
    };
    match i32::try_from(raw) {
        Ok(depth) => depth,
        Err(_) => {
            warn!(depth = raw, "Structure depth out of range, exporting no descendants");
            0
        }
    }
}

/// Style-level root flag
pub fn is_root_page(style: Option<&dyn Style>) -> bool {
    style
        .and_then(|s| s.boolean(PN_IS_ROOT))
        .unwrap_or(false)
}
