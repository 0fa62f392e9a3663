//! Export URL mapping
//!
//! Derives the public URL of a page (vanity URL, context path, `.html` extension) and
//! the JSON model export URL built from it.

use crate::tree::Page;
use crate::types::JSON_EXPORT_SUFFIX;
use std::sync::Arc;
use tracing::error;

const HTML_EXTENSION: &str = ".html";

/// URL mapper interface
pub trait UrlMapper: Send + Sync {
    fn export_url(&self, page: &Page, author_mode: bool, use_extension: bool) -> String;
}

/// Resource path mapping applied to author URLs (e.g. host-level rewrite rules)
pub trait PathMapping: Send + Sync {
    fn map(&self, path: &str) -> String;
}

/// Default URL mapper: vanity URL, then mapped author path, then context path + page path.
#[derive(Clone, Default)]
pub struct PublicUrlMapper {
    context_path: Option<String>,
    path_mapping: Option<Arc<dyn PathMapping>>,
}

impl PublicUrlMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = Some(context_path.into());
        self
    }

    pub fn with_path_mapping(mut self, mapping: Arc<dyn PathMapping>) -> Self {
        self.path_mapping = Some(mapping);
        self
    }

    fn context_path(&self) -> &str {
        self.context_path.as_deref().unwrap_or("")
    }

    fn map_path(&self, path: &str) -> String {
        let Some(mapping) = &self.path_mapping else {
            return path.to_string();
        };
        let mapped = mapping.map(path);
        if !mapped.starts_with("http") {
            return mapped;
        }
        match ::url::Url::parse(&mapped) {
            Ok(parsed) => parsed.path().to_string(),
            Err(e) => {
                error!(mapped = %mapped, error = %e, "Failed to parse mapped page URL");
                mapped
            }
        }
    }
}

impl std::fmt::Debug for PublicUrlMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicUrlMapper")
            .field("context_path", &self.context_path)
            .field("path_mapping", &self.path_mapping.is_some())
            .finish()
    }
}

impl UrlMapper for PublicUrlMapper {
    fn export_url(&self, page: &Page, author_mode: bool, use_extension: bool) -> String {
        let extension = if use_extension { HTML_EXTENSION } else { "" };
        match page.vanity_url.as_deref().filter(|v| !v.is_empty()) {
            Some(vanity) => format!("{}{}", self.context_path(), vanity),
            None if author_mode => format!("{}{}", self.map_path(&page.path), extension),
            None => format!("{}{}{}", self.context_path(), page.path, extension),
        }
    }
}

/// JSON model export URL for a page URL.
///
/// Truncates at the first `.` and appends `.model.json`; blank input yields `None`.
pub fn json_export_url(url: &str) -> Option<String> {
    if url.trim().is_empty() {
        return None;
    }
    let end = url.find('.').unwrap_or(url.len());
    Some(format!("{}{}", &url[..end], JSON_EXPORT_SUFFIX))
}

/// JSON model export URL of a page
pub fn page_json_export_url(
    mapper: &dyn UrlMapper,
    page: &Page,
    author_mode: bool,
    use_extension: bool,
) -> Option<String> {
    json_export_url(&mapper.export_url(page, author_mode, use_extension))
}
