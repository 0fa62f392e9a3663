//! In-memory content tree
//!
//! Backs the CLI and the tests. Pages are registered from [`PageSpec`]s, either in code
//! or from a TOML fixture:
//!
//! ```toml
//! [[pages]]
//! path = "/content/app"
//! structure_support = true
//! policy = { isRoot = true }
//! style = { isRoot = true, structureDepth = 2 }
//! ```
//!
//! Parents default to the path's parent; children keep registration order.

use crate::error::ApiError;
use crate::policy::{ContentPolicy, PolicyProvider};
use crate::style::{StyleProperties, StyleSource};
use crate::tree::page::{Page, Template};
use crate::tree::path::{normalize_page_path, parent_path};
use crate::tree::ContentTree;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

fn default_true() -> bool {
    true
}

/// Declarative page registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub structure_support: bool,
    #[serde(default)]
    pub vanity_url: Option<String>,
    /// Whether the page has a content resource (pages without one are skipped on export)
    #[serde(default = "default_true")]
    pub has_content: bool,
    /// Explicit parent path, overriding the one derived from `path`
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub policy: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub style: StyleProperties,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl PageSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            resource_type: None,
            template: None,
            structure_support: false,
            vanity_url: None,
            has_content: true,
            parent: None,
            policy: None,
            style: StyleProperties::default(),
            properties: BTreeMap::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn structure_support(mut self) -> Self {
        self.structure_support = true;
        self
    }

    pub fn vanity_url(mut self, vanity_url: impl Into<String>) -> Self {
        self.vanity_url = Some(vanity_url.into());
        self
    }

    pub fn without_content(mut self) -> Self {
        self.has_content = false;
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn policy_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.policy
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), Value::Bool(value));
        self
    }

    pub fn style(mut self, style: StyleProperties) -> Self {
        self.style = style;
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    fn to_page(&self, path: String) -> Page {
        let template = if self.template.is_some() || self.structure_support {
            Some(Template {
                path: self.template.clone().unwrap_or_default(),
                structure_support: self.structure_support,
            })
        } else {
            None
        };
        Page {
            path,
            title: self.title.clone(),
            resource_type: self.resource_type.clone(),
            template,
            vanity_url: self.vanity_url.clone(),
            properties: self.properties.clone(),
        }
    }
}

/// TOML tree fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeFixture {
    /// When false the tree exposes no policy provider
    #[serde(default = "default_true")]
    pub policy_support: bool,
    #[serde(default)]
    pub pages: Vec<PageSpec>,
}

struct PageEntry {
    page: Page,
    has_content: bool,
    policy: Option<ContentPolicy>,
    style: StyleProperties,
}

struct TreeState {
    pages: HashMap<String, PageEntry>,
    parents: HashMap<String, String>,
    children: HashMap<String, Vec<String>>,
    policy_support: bool,
}

/// Content tree held in memory
pub struct InMemoryTree {
    state: RwLock<TreeState>,
}

impl Default for InMemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTree {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TreeState {
                pages: HashMap::new(),
                parents: HashMap::new(),
                children: HashMap::new(),
                policy_support: true,
            }),
        }
    }

    pub fn from_fixture(fixture: TreeFixture) -> Self {
        let tree = Self::new();
        tree.set_policy_support(fixture.policy_support);
        for spec in fixture.pages {
            tree.insert(spec);
        }
        tree
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let fixture: TreeFixture = toml::from_str(contents)?;
        Ok(Self::from_fixture(fixture))
    }

    /// Load a tree from a TOML fixture file
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ApiError::TreeLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let tree = Self::from_toml_str(&contents).map_err(|e| ApiError::TreeLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), pages = tree.len(), "Loaded tree fixture");
        Ok(tree)
    }

    /// Register a page. Re-registering a path replaces its data and keeps its position.
    pub fn insert(&self, spec: PageSpec) {
        let path = normalize_page_path(&spec.path);
        let parent = match &spec.parent {
            Some(parent) => Some(normalize_page_path(parent)),
            None => parent_path(&path).map(str::to_string),
        };
        let entry = PageEntry {
            page: spec.to_page(path.clone()),
            has_content: spec.has_content,
            policy: spec.policy.clone().map(|properties| ContentPolicy { properties }),
            style: spec.style.clone(),
        };

        let mut state = self.state.write();
        state.pages.insert(path.clone(), entry);
        if let Some(parent) = parent {
            Self::link(&mut state, &path, parent);
        }
    }

    /// Re-parent a page. No validation is done, so cyclic chains can be built.
    pub fn set_parent(&self, path: &str, parent: &str) {
        let path = normalize_page_path(path);
        let parent = normalize_page_path(parent);
        let mut state = self.state.write();
        Self::link(&mut state, &path, parent);
    }

    pub fn set_policy_flag(&self, path: &str, name: &str, value: bool) {
        let path = normalize_page_path(path);
        let mut state = self.state.write();
        if let Some(entry) = state.pages.get_mut(&path) {
            entry
                .policy
                .get_or_insert_with(ContentPolicy::default)
                .properties
                .insert(name.to_string(), Value::Bool(value));
        }
    }

    pub fn set_policy_support(&self, enabled: bool) {
        self.state.write().policy_support = enabled;
    }

    pub fn len(&self) -> usize {
        self.state.read().pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn link(state: &mut TreeState, path: &str, parent: String) {
        let previous = state.parents.insert(path.to_string(), parent.clone());
        if let Some(previous) = previous.filter(|previous| *previous != parent) {
            if let Some(siblings) = state.children.get_mut(&previous) {
                siblings.retain(|p| p != path);
            }
        }
        let siblings = state.children.entry(parent).or_default();
        if !siblings.iter().any(|p| p == path) {
            siblings.push(path.to_string());
        }
    }
}

impl ContentTree for InMemoryTree {
    fn page(&self, path: &str) -> Option<Page> {
        let path = normalize_page_path(path);
        self.state.read().pages.get(&path).map(|e| e.page.clone())
    }

    fn parent(&self, page: &Page) -> Option<Page> {
        let state = self.state.read();
        let parent = state.parents.get(&page.path)?;
        state.pages.get(parent).map(|e| e.page.clone())
    }

    fn children(&self, page: &Page) -> Option<Vec<Page>> {
        let state = self.state.read();
        let children = state.children.get(&page.path)?;
        Some(
            children
                .iter()
                .filter_map(|p| state.pages.get(p).map(|e| e.page.clone()))
                .collect(),
        )
    }

    fn has_content(&self, page: &Page) -> bool {
        self.state
            .read()
            .pages
            .get(&page.path)
            .map(|e| e.has_content)
            .unwrap_or(false)
    }

    fn policy_provider(&self) -> Option<&dyn PolicyProvider> {
        if self.state.read().policy_support {
            Some(self as &dyn PolicyProvider)
        } else {
            None
        }
    }
}

impl PolicyProvider for InMemoryTree {
    fn policy(&self, page: &Page) -> Option<ContentPolicy> {
        self.state
            .read()
            .pages
            .get(&page.path)
            .and_then(|e| e.policy.clone())
    }
}

impl StyleSource for InMemoryTree {
    fn style(&self, page: &Page) -> Option<StyleProperties> {
        self.state
            .read()
            .pages
            .get(&page.path)
            .map(|e| e.style.clone())
            .filter(|style| !style.is_empty())
    }
}
