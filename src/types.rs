//! Shared property names and small value types.

use serde::{Deserialize, Serialize};

/// Style/policy property flagging a page as the root of an exported hierarchy
pub const PN_IS_ROOT: &str = "isRoot";

/// Style property holding the number of descendant generations to export
pub const PN_STRUCTURE_DEPTH: &str = "structureDepth";

/// Style property (and lowercased request parameter) holding comma-separated path patterns
pub const PN_STRUCTURE_PATTERNS: &str = "structurePatterns";

/// Page property holding the URL of a remotely hosted application
pub const PN_REMOTE_SPA_URL: &str = "remoteSPAUrl";

/// Suffix of the JSON model export URL
pub const JSON_EXPORT_SUFFIX: &str = ".model.json";

/// Kind of hierarchy node reported in an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyType {
    Page,
}
