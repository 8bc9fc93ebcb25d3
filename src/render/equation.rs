//! Equation rendering.
//!
//! The payload is passed through between inline-math delimiters as-is. The
//! source editor's internal equation encoding is not translated to LaTeX,
//! so complex equations may not typeset correctly downstream.

use crate::model::Equation;

/// Render an equation as a standalone `$...$` block.
pub fn render_equation(equation: &Equation) -> String {
    let raw = equation.equation.as_deref().unwrap_or_default();
    format!("\n\n${}$\n\n", raw)
}
