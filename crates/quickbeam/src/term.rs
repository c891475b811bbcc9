//! The term model: a closed set of AST node variants
//!
//! Every node of the source tree is a [`Term`]. Statement-shaped variants
//! (`Let`, `If`, `Function`, `Tuple`) carry an optional `next` successor
//! forming a singly-linked, forward-only chain: "this statement, then the
//! next". Expression-shaped variants have no successor field at all, so the
//! "expressions never consume a chained successor" invariant is structural.
//!
//! Terms are immutable once constructed. Children are held by `Box`/`Vec`
//! with single ownership, so trees and chains are acyclic by construction.

/// A node in the abstract syntax tree.
///
/// The variant set is closed and matched exhaustively: every kind has both a
/// decode rule ([`crate::decode`]) and a render rule ([`crate::render`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// No-op / absent node
    Empty,

    /// Literal integer
    Int(i64),

    /// Literal string
    Str(String),

    /// Variable reference
    Var(String),

    /// Binary operation.
    ///
    /// The operator stays a raw tag so that an unknown operator surfaces
    /// lazily, at render time, for the node actually being rendered.
    Binary {
        /// Abstract operator tag (`Add`, `Lt`, `And`, ...)
        op: String,
        /// Left operand
        lhs: Box<Term>,
        /// Right operand
        rhs: Box<Term>,
    },

    /// Function invocation
    Call {
        /// The callee expression
        callee: Box<Term>,
        /// Arguments in input order; order is semantically significant
        arguments: Vec<Term>,
    },

    /// Side-effecting print statement
    Print(Box<Term>),

    /// First projection of a pair
    First(Box<Term>),

    /// Second projection of a pair
    Second(Box<Term>),

    /// Conditional with mandatory then-branch
    If {
        /// Condition expression
        condition: Box<Term>,
        /// Then-branch (mandatory)
        then: Box<Term>,
        /// Else-branch, absent for a bare `if`
        otherwise: Option<Box<Term>>,
        /// Chained successor statement
        next: Option<Box<Term>>,
    },

    /// Function literal
    Function {
        /// Parameter names in declaration order
        parameters: Vec<String>,
        /// Function body
        body: Box<Term>,
        /// Chained successor statement
        next: Option<Box<Term>>,
    },

    /// Variable or function binding
    Let {
        /// Binding name
        name: String,
        /// Bound value
        value: Box<Term>,
        /// Chained successor statement
        next: Option<Box<Term>>,
    },

    /// Pair construction
    Tuple {
        /// First component
        first: Box<Term>,
        /// Second component
        second: Box<Term>,
        /// Chained successor statement
        next: Option<Box<Term>>,
    },
}

impl Term {
    /// Whether this variant is statement-shaped and may carry a successor.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Term::Let { .. } | Term::If { .. } | Term::Function { .. } | Term::Tuple { .. }
        )
    }

    /// Human-readable kind label for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Empty => "Empty",
            Term::Int(_) => "Int",
            Term::Str(_) => "Str",
            Term::Var(_) => "Var",
            Term::Binary { .. } => "Binary",
            Term::Call { .. } => "Call",
            Term::Print(_) => "Print",
            Term::First(_) => "First",
            Term::Second(_) => "Second",
            Term::If { .. } => "If",
            Term::Function { .. } => "Function",
            Term::Let { .. } => "Let",
            Term::Tuple { .. } => "Tuple",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Constructor Conveniences
// ═══════════════════════════════════════════════════════════════════════

impl Term {
    /// Create an integer literal term.
    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    /// Create a string literal term.
    pub fn string(value: impl Into<String>) -> Self {
        Term::Str(value.into())
    }

    /// Create a variable reference term.
    pub fn var(text: impl Into<String>) -> Self {
        Term::Var(text.into())
    }

    /// Create a binary operation term.
    pub fn binary(op: impl Into<String>, lhs: Term, rhs: Term) -> Self {
        Term::Binary {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Create a function invocation term.
    pub fn call(callee: Term, arguments: Vec<Term>) -> Self {
        Term::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a print statement term.
    pub fn print(value: Term) -> Self {
        Term::Print(Box::new(value))
    }

    /// Create a binding term with an optional successor.
    pub fn binding(name: impl Into<String>, value: Term, next: Option<Term>) -> Self {
        Term::Let {
            name: name.into(),
            value: Box::new(value),
            next: next.map(Box::new),
        }
    }
}
