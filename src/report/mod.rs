//! Rendering of evaluation results for people and machines.

mod json;
mod text;

pub use json::JsonReport;
pub use text::render_text;

use crate::hazard::HazardResult;
use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned plain-text sections.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Report rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a result in the requested format.
pub fn render(result: &HazardResult, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(result)),
        ReportFormat::Json => JsonReport::new(result).to_json(),
    }
}
