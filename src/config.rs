//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, the workspace (or
//! explicit) config file, then `PAGETREE__` environment variables.

use crate::error::ApiError;
use crate::hierarchy::{ExportOptions, DEFAULT_MAX_ANCESTOR_HOPS};
use crate::logging::LoggingConfig;
use crate::url::PublicUrlMapper;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

mod sources;

pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

const ENV_PREFIX: &str = "PAGETREE";
const ENV_SEPARATOR: &str = "__";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagetreeConfig {
    /// Export behavior
    #[serde(default)]
    pub hierarchy: HierarchyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Export behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Export raw page paths instead of public URLs
    #[serde(default)]
    pub author_mode: bool,

    /// Append `.html` to exported URLs
    #[serde(default = "default_true")]
    pub use_extension: bool,

    /// Prefix of every public URL, e.g. `/site`
    #[serde(default)]
    pub context_path: Option<String>,

    /// Bound on the root resolver's ancestor walk
    #[serde(default = "default_max_ancestor_hops")]
    pub max_ancestor_hops: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_ancestor_hops() -> usize {
    DEFAULT_MAX_ANCESTOR_HOPS
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            author_mode: false,
            use_extension: default_true(),
            context_path: None,
            max_ancestor_hops: default_max_ancestor_hops(),
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_ancestor_hops == 0 {
            return Err("max_ancestor_hops must be greater than zero".to_string());
        }
        if let Some(context_path) = &self.context_path {
            if !context_path.is_empty() && !context_path.starts_with('/') {
                return Err(format!(
                    "context_path must be empty or start with '/': {}",
                    context_path
                ));
            }
        }
        Ok(())
    }

    /// Export options for a request without structure patterns
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            structure_patterns: None,
            author_mode: self.author_mode,
            use_extension: self.use_extension,
        }
    }

    pub fn url_mapper(&self) -> PublicUrlMapper {
        match self.context_path.as_deref().filter(|p| !p.is_empty()) {
            Some(context_path) => PublicUrlMapper::new().with_context_path(context_path),
            None => PublicUrlMapper::new(),
        }
    }
}

impl PagetreeConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.hierarchy
            .validate()
            .map_err(|e| ApiError::ConfigError(format!("hierarchy: {}", e)))
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, `explicit` file or
    /// `<workspace_root>/pagetree.toml`, environment.
    pub fn load(workspace_root: &Path, explicit: Option<&Path>) -> Result<PagetreeConfig, ApiError> {
        let builder = Self::defaults()?;
        let builder = sources::global_file::add_to_builder(builder);
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root, explicit);
        let config = builder.add_source(Self::environment()).build()?;

        let config: PagetreeConfig = config.try_deserialize()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single file over the defaults
    pub fn load_from_file(path: &Path) -> Result<PagetreeConfig, ApiError> {
        let config = Self::defaults()?
            .add_source(config::File::from(path).required(true))
            .build()?;
        let config: PagetreeConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ApiError> {
        let builder = Config::builder()
            .set_default("hierarchy.author_mode", false)?
            .set_default("hierarchy.use_extension", true)?
            .set_default(
                "hierarchy.max_ancestor_hops",
                DEFAULT_MAX_ANCESTOR_HOPS as u64,
            )?;
        Ok(builder)
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }
}
