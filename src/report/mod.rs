//! Rendering a match mapping for output

use crate::config::OutputFormat;
use crate::types::MatchMapping;

/// Render `mapping` in the requested format.
///
/// JSON output always has sorted keys so runs are diffable.
pub fn render(mapping: &MatchMapping, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(&mapping.to_sorted()),
        OutputFormat::Pretty => serde_json::to_string_pretty(&mapping.to_sorted()),
        OutputFormat::Pairs => Ok(render_pairs(mapping)),
    }
}

/// Fixed points as `word`, pairs as `a <-> b`, leftovers as `a -> b`
fn render_pairs(mapping: &MatchMapping) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(mapping.len());

    lines.extend(mapping.fixed_points().into_iter().map(str::to_string));
    lines.extend(
        mapping
            .pairs()
            .into_iter()
            .map(|(a, b)| format!("{} <-> {}", a, b)),
    );
    lines.extend(
        mapping
            .one_way()
            .into_iter()
            .map(|(a, b)| format!("{} -> {}", a, b)),
    );

    lines.join("\n")
}
