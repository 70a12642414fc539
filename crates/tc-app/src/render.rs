//! Plain-text rendering of a calculation result.

use std::fmt::Write;
use tc_api::CalculationResult;

/// Format a property value with four decimals.
pub fn format_value(value: f64) -> String {
    format!("{value:.4}")
}

/// Render the "State Information" block and, when present, the
/// "Saturation Properties" block.
pub fn render_result(result: &CalculationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "State Information");
    let _ = writeln!(out, "  State:   {}", result.state);
    let _ = writeln!(out, "  Details: {}", result.details);

    if let Some(props) = &result.saturation_properties {
        if !props.is_empty() {
            let width = props
                .iter()
                .map(|p| p.name.chars().count())
                .max()
                .unwrap_or(0);

            let _ = writeln!(out);
            let _ = writeln!(out, "Saturation Properties");
            for prop in props.iter() {
                let pad = width - prop.name.chars().count();
                let _ = writeln!(
                    out,
                    "  {}:{} {}",
                    prop.name,
                    " ".repeat(pad),
                    format_value(prop.value)
                );
            }
        }
    }

    out
}
