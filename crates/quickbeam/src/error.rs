//! Error types for Quickbeam translation

use thiserror::Error;

/// Error raised while decoding a document tree into terms.
///
/// Decoding has no partial-result mode: the first error aborts the whole
/// translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A mandatory document field is missing
    #[error("document field `{field}` is missing")]
    MissingField {
        /// Name of the missing field
        field: String,
    },

    /// A document field has the wrong shape
    #[error("document field `{field}` is not {expected}")]
    WrongShape {
        /// Name of the offending field
        field: String,
        /// What the field was expected to be
        expected: &'static str,
    },

    /// The `kind` tag is outside the closed vocabulary
    #[error("AST node of kind `{kind}` is not supported")]
    UnsupportedKind {
        /// The offending kind tag
        kind: String,
    },

    /// A `next` successor was attached to an expression-shaped node
    #[error("`next` is not allowed on expression node of kind `{kind}`")]
    StrayNext {
        /// Kind of the node carrying the stray successor
        kind: String,
    },
}

/// Error raised while rendering a term tree to source text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A binary operator tag absent from the symbol table.
    ///
    /// Operator lookup is lazy: the tag is only resolved when the node
    /// carrying it is rendered.
    #[error("unknown binary operator `{op}`")]
    UnknownOperator {
        /// The offending operator tag
        op: String,
    },
}

/// Error raised at the external evaluator boundary.
#[derive(Error, Debug)]
pub enum HostError {
    /// The host command could not be resolved on the search path
    #[error("host command `{command}` not found: {source}")]
    CommandNotFound {
        /// The command that was looked up
        command: String,
        /// Underlying lookup failure
        source: which::Error,
    },

    /// I/O failure while handing source to the host process
    #[error("host evaluator I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Umbrella error type for Quickbeam operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Document decoding failed
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Source rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Host evaluation boundary failed
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Result type alias for Quickbeam operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
