//! # Quickbeam
//!
//! A syntax-directed translator for serialized expression-language ASTs.
//!
//! Quickbeam ingests a kind-tagged JSON document tree, decodes it into a
//! closed set of strongly-typed [`Term`] variants, and renders the typed tree
//! into host-language source text. The generated text is handed to an
//! external dynamic evaluator, which Quickbeam treats as an opaque service
//! behind the [`HostEvaluator`] trait.
//!
//! ## Architecture
//!
//! - **Term Model**: closed AST variants plus statement chaining
//! - **Tree Deserializer**: generic document tree → typed terms
//! - **Code Generator**: typed terms → host source text
//! - **Host Boundary**: run generated text via an external command
//!
//! Translation is a single deterministic pass with no semantic analysis,
//! no global state, and no partial results on error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod error;
pub mod host;
pub mod render;
pub mod term;

// Re-export main types
pub use decode::{decode_document, SourceDoc};
pub use error::{DecodeError, Error, HostError, RenderError, Result};
pub use host::{CommandEvaluator, EvalOutput, HostEvaluator};
pub use render::{render_to_string, Render};
pub use term::Term;

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
