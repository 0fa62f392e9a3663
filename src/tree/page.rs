//! Page value type

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Page template metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub path: String,
    #[serde(default)]
    pub structure_support: bool,
}

/// A page in the content tree.
///
/// The path is the page's identity; two `Page` values with the same path refer to the
/// same tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub template: Option<Template>,
    #[serde(default)]
    pub vanity_url: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Page {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            resource_type: None,
            template: None,
            vanity_url: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_vanity_url(mut self, vanity_url: impl Into<String>) -> Self {
        self.vanity_url = Some(vanity_url.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Whether the page's template declares structure support
    pub fn has_structure_support(&self) -> bool {
        self.template
            .as_ref()
            .map(|t| t.structure_support)
            .unwrap_or(false)
    }

    /// String page property
    pub fn string_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    /// Same tree node (path equality)
    pub fn same_page(&self, other: &Page) -> bool {
        self.path == other.path
    }
}
