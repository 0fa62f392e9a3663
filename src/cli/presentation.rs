//! CLI presentation: JSON and table rendering of command results.

use crate::cli::parse::OutputFormat;
use crate::error::ApiError;
use crate::model::PageExport;
use comfy_table::Table;
use serde::Serialize;

/// Result of the `root` command
#[derive(Debug, Clone, Serialize)]
pub struct RootSummary {
    pub page: String,
    pub is_root_page: bool,
    pub root_page: Option<String>,
    pub root_json_export_url: Option<String>,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Output(e.to_string()))
}

/// Render a page export: the full model as JSON, or one table row per exported page
pub fn format_export(export: &PageExport, format: OutputFormat) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return to_json(export);
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Key", "Path", "Type", "Title"]);
    if let Some(children) = &export.children {
        for (key, model) in children.iter() {
            table.add_row(vec![
                key,
                model.path.as_str(),
                model.resource_type.as_deref().unwrap_or("-"),
                model.title.as_deref().unwrap_or("-"),
            ]);
        }
    }
    Ok(format!("{}\n{}", export.path, table))
}

/// Render the root of a page
pub fn format_root(summary: &RootSummary, format: OutputFormat) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        return to_json(summary);
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Page", summary.page.as_str()]);
    table.add_row(vec![
        "Root page (style)",
        if summary.is_root_page { "yes" } else { "no" },
    ]);
    table.add_row(vec!["Root page", summary.root_page.as_deref().unwrap_or("-")]);
    table.add_row(vec![
        "Root JSON export URL",
        summary.root_json_export_url.as_deref().unwrap_or("-"),
    ]);
    Ok(table.to_string())
}
