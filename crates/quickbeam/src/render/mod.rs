//! Source text generation
//!
//! Walks a typed term tree and appends host-language source text to an
//! accumulating buffer. Each statement-shaped node renders itself and then
//! its chained successor; expression-shaped nodes render only themselves.
//!
//! Rendering is a pure append to the caller-supplied buffer: no I/O, no
//! global state, no mutation of the tree. Re-rendering the same tree yields
//! byte-identical text.

pub mod binary;
pub mod call;
pub mod control;
pub mod function;
pub mod tuple;

use crate::error::RenderError;
use crate::term::Term;

/// Trait for rendering AST nodes to host source text.
///
/// This is the core abstraction of the code generator. The dispatcher below
/// is exhaustive over the closed variant set, so every kind is guaranteed a
/// rendering rule at compile time.
pub trait Render {
    /// Append this node's rendering (and its successors, where applicable)
    /// to the output buffer.
    fn render(&self, out: &mut String) -> Result<(), RenderError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Term Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Render for Term {
    fn render(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            Term::Empty => Ok(()),

            Term::Int(value) => {
                out.push_str(&value.to_string());
                Ok(())
            }
            Term::Str(value) => {
                // Direct interpolation; embedded quotes are not escaped.
                out.push('"');
                out.push_str(value);
                out.push('"');
                Ok(())
            }
            Term::Var(text) => {
                out.push_str(text);
                Ok(())
            }

            Term::Binary { op, lhs, rhs } => binary::render_binary(op, lhs, rhs, out),
            Term::Call { callee, arguments } => call::render_call(callee, arguments, out),
            Term::Print(value) => call::render_print(value, out),
            Term::First(value) => tuple::render_first(value, out),
            Term::Second(value) => tuple::render_second(value, out),

            Term::If {
                condition,
                then,
                otherwise,
                next,
            } => control::render_if(condition, then, otherwise.as_deref(), next.as_deref(), out),
            Term::Function {
                parameters,
                body,
                next,
            } => function::render_function(parameters, body, next.as_deref(), out),
            Term::Let { name, value, next } => {
                function::render_let(name, value, next.as_deref(), out)
            }
            Term::Tuple {
                first,
                second,
                next,
            } => tuple::render_tuple(first, second, next.as_deref(), out),
        }
    }
}

/// Render a term tree into a fresh buffer (convenience wrapper).
pub fn render_to_string(term: &Term) -> Result<String, RenderError> {
    let mut out = String::new();
    term.render(&mut out)?;
    Ok(out)
}

/// Append the rendering of a chained successor, if any.
pub(crate) fn render_next(next: Option<&Term>, out: &mut String) -> Result<(), RenderError> {
    match next {
        Some(succ) => succ.render(out),
        None => Ok(()),
    }
}
