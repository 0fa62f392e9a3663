//! Structure patterns: regular expressions selecting which descendant paths are exported.

use crate::error::HierarchyError;
use crate::style::Style;
use crate::types::PN_STRUCTURE_PATTERNS;
use regex::Regex;

/// Compiled structure patterns. An empty set matches every path.
#[derive(Debug, Clone, Default)]
pub struct StructurePatterns {
    patterns: Vec<Regex>,
}

impl StructurePatterns {
    /// Parse comma-separated patterns.
    ///
    /// Blank input yields no patterns. Otherwise fragments are compiled exactly as
    /// written: whitespace is kept, trailing empty fragments are dropped, and a leading
    /// or inner empty fragment compiles to a pattern matching every path. The first
    /// fragment that fails to compile fails the whole parse.
    pub fn parse(raw: &str) -> Result<Self, HierarchyError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut fragments: Vec<&str> = raw.split(',').collect();
        while matches!(fragments.last(), Some(last) if last.is_empty()) {
            fragments.pop();
        }

        let mut patterns = Vec::with_capacity(fragments.len());
        for fragment in fragments {
            let pattern = Regex::new(fragment).map_err(|source| HierarchyError::PatternCompile {
                fragment: fragment.to_string(),
                source,
            })?;
            patterns.push(pattern);
        }
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the path is selected: no patterns, or any pattern matching part of it
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.is_match(path))
    }

    pub(crate) fn as_strs(&self) -> Vec<&str> {
        self.patterns.iter().map(Regex::as_str).collect()
    }
}

/// Resolve structure patterns for an export.
///
/// Non-blank request input wins over the style's `structurePatterns` setting.
pub fn resolve_structure_patterns(
    request_input: Option<&str>,
    style: Option<&dyn Style>,
) -> Result<StructurePatterns, HierarchyError> {
    let raw = match request_input.filter(|r| !r.trim().is_empty()) {
        Some(raw) => Some(raw.to_string()),
        None => style.and_then(|s| s.string(PN_STRUCTURE_PATTERNS)),
    };
    match raw {
        Some(raw) => StructurePatterns::parse(&raw),
        None => Ok(StructurePatterns::default()),
    }
}
