//! Function literal and binding rendering

use crate::error::RenderError;
use crate::term::Term;

use super::Render;

/// Render a function literal: a parenthesized parameter list, each parameter
/// prefixed with the fixed `int` keyword, followed by a braced body block.
///
/// The body goes through a private sub-buffer that is spliced in only once
/// fully computed, so partially rendered text is never observed out of order.
pub(super) fn render_function(
    parameters: &[String],
    body: &Term,
    next: Option<&Term>,
    out: &mut String,
) -> Result<(), RenderError> {
    let mut body_src = String::new();
    body.render(&mut body_src)?;

    out.push('(');
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str("int ");
        out.push_str(parameter);
    }
    out.push_str(")\n{\n");
    out.push_str(&body_src);
    out.push_str("\n}\n");

    super::render_next(next, out)
}

/// Render a binding statement.
///
/// A bound `Function` becomes a named declaration (`int <name>(...) {...}`,
/// no assignment operator); any other value becomes `var <name> = <value>;`.
/// In both cases the chained successor follows the binding.
pub(super) fn render_let(
    name: &str,
    value: &Term,
    next: Option<&Term>,
    out: &mut String,
) -> Result<(), RenderError> {
    let mut value_src = String::new();
    value.render(&mut value_src)?;

    if matches!(value, Term::Function { .. }) {
        out.push_str("int ");
        out.push_str(name);
        out.push_str(&value_src);
    } else {
        out.push_str("var ");
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(&value_src);
        out.push_str(";\n");
    }

    super::render_next(next, out)
}
