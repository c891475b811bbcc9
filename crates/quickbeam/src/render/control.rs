//! Conditional block rendering

use crate::error::RenderError;
use crate::term::Term;

use super::Render;

/// Render a host-language conditional block.
///
/// Shape: `if (<cond>)` followed by a braced `return <then>;` block, then an
/// optional `else` block of the same shape. The chained successor, if any,
/// is emitted after the whole construct.
pub(super) fn render_if(
    condition: &Term,
    then: &Term,
    otherwise: Option<&Term>,
    next: Option<&Term>,
    out: &mut String,
) -> Result<(), RenderError> {
    out.push_str("if (");
    condition.render(out)?;
    out.push_str(")\n{\n");
    render_return(then, out)?;

    if let Some(branch) = otherwise {
        out.push_str("else\n{\n");
        render_return(branch, out)?;
    }

    super::render_next(next, out)
}

/// Render `return <branch>;` and close the surrounding block.
fn render_return(branch: &Term, out: &mut String) -> Result<(), RenderError> {
    out.push_str("return ");
    branch.render(out)?;
    out.push_str(";\n}\n");
    Ok(())
}
