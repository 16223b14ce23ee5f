//! JSON rendering of layout plans.

use crate::error::{Error, Result};

use super::RenderPlan;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a plan to JSON.
pub fn to_json(plan: &RenderPlan, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(plan),
        JsonFormat::Compact => serde_json::to_string(plan),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
