//! Pair construction and projection rendering

use crate::error::RenderError;
use crate::term::Term;

use super::Render;

/// Render a host tuple literal `(<first>, <second>)`, then the successor.
pub(super) fn render_tuple(
    first: &Term,
    second: &Term,
    next: Option<&Term>,
    out: &mut String,
) -> Result<(), RenderError> {
    out.push('(');
    first.render(out)?;
    out.push_str(", ");
    second.render(out)?;
    out.push(')');

    super::render_next(next, out)
}

/// Render the first projection: `<inner>.Item1`.
pub(super) fn render_first(value: &Term, out: &mut String) -> Result<(), RenderError> {
    value.render(out)?;
    out.push_str(".Item1");
    Ok(())
}

/// Render the second projection: `<inner>.Item2`.
pub(super) fn render_second(value: &Term, out: &mut String) -> Result<(), RenderError> {
    value.render(out)?;
    out.push_str(".Item2");
    Ok(())
}
