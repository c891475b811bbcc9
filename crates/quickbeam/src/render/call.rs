//! Call and print rendering

use crate::error::RenderError;
use crate::term::Term;

use super::Render;

/// Render `<callee>(<a>,<b>)`.
///
/// Arguments keep their input order; the generated parameter list has no
/// space after commas and no trailing comma.
pub(super) fn render_call(
    callee: &Term,
    arguments: &[Term],
    out: &mut String,
) -> Result<(), RenderError> {
    callee.render(out)?;
    out.push('(');
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        arg.render(out)?;
    }
    out.push(')');
    Ok(())
}

/// Render a console-output statement wrapping the value.
pub(super) fn render_print(value: &Term, out: &mut String) -> Result<(), RenderError> {
    let mut value_src = String::new();
    value.render(&mut value_src)?;

    out.push_str("System.Console.WriteLine(");
    out.push_str(&value_src);
    out.push_str(");\n");
    Ok(())
}
