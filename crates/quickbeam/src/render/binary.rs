//! Binary operation rendering and the operator symbol table

use crate::error::RenderError;
use crate::term::Term;

use super::Render;

/// Map an abstract operator tag to its host symbol.
///
/// The vocabulary is fixed; the table is a pure function so translation
/// keeps no global state.
pub fn op_symbol(op: &str) -> Option<&'static str> {
    match op {
        // Arithmetic
        "Add" => Some("+"),
        "Sub" => Some("-"),
        "Mul" => Some("*"),
        "Div" => Some("/"),
        "Rem" => Some("%"),

        // Comparison
        "Eq" => Some("=="),
        "Neq" => Some("!="),
        "Lt" => Some("<"),
        "Gt" => Some(">"),
        "Lte" => Some("<="),
        "Gte" => Some(">="),

        // Logical
        "And" => Some("&&"),
        "Or" => Some("||"),

        _ => None,
    }
}

/// Render `<lhs> <op> <rhs>` with single spaces around the operator.
///
/// The operator tag is resolved lazily, for the node actually being
/// rendered; an unknown tag fails here rather than at decode time.
pub(super) fn render_binary(
    op: &str,
    lhs: &Term,
    rhs: &Term,
    out: &mut String,
) -> Result<(), RenderError> {
    let symbol = op_symbol(op).ok_or_else(|| RenderError::UnknownOperator { op: op.to_string() })?;

    lhs.render(out)?;
    out.push(' ');
    out.push_str(symbol);
    out.push(' ');
    rhs.render(out)
}
