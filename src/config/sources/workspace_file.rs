//! Workspace config file source: an explicit file, or pagetree.toml in the workspace root

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::Path;

pub const WORKSPACE_CONFIG_FILE: &str = "pagetree.toml";

/// Add the workspace config file to builder.
///
/// An explicit file must exist; the workspace default is optional.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
    explicit: Option<&Path>,
) -> ConfigBuilder<DefaultState> {
    match explicit {
        Some(path) => builder.add_source(File::from(path).required(true)),
        None => {
            let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
            if path.exists() {
                builder.add_source(File::from(path).required(false))
            } else {
                builder
            }
        }
    }
}
