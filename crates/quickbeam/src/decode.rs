//! Tree deserialization: generic document tree → typed terms
//!
//! The input is a recursive, kind-tagged document (a `serde_json::Value`
//! object graph). Field names on the wire are the lowercase form of each
//! variant's field identifiers (`lhs`, `rhs`, `op`, `value`, `callee`, ...);
//! this convention is a hard compatibility requirement with existing
//! documents.
//!
//! Decoding is pure construction with no partial-result mode: any missing
//! mandatory field, unparsable scalar, or unknown kind aborts the whole
//! translation.

use serde::Deserialize;
use serde_json::Value as Document;

use crate::error::DecodeError;
use crate::term::Term;

/// Root wrapper of a serialized source document.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDoc {
    /// Optional program name carried by the document
    #[serde(default)]
    pub name: Option<String>,

    /// The root expression document
    pub expression: Document,
}

impl SourceDoc {
    /// Decode the root expression into a term tree.
    pub fn decode(&self) -> Result<Term, DecodeError> {
        decode_document(Some(&self.expression))
    }
}

/// Decode a document node into exactly one [`Term`].
///
/// An absent or `null` document decodes to [`Term::Empty`]. Everything else
/// must be an object carrying a `kind` tag from the closed vocabulary.
///
/// # Errors
///
/// - [`DecodeError::MissingField`] for a missing mandatory field
/// - [`DecodeError::WrongShape`] for a field of the wrong shape
/// - [`DecodeError::UnsupportedKind`] for a tag outside the vocabulary
/// - [`DecodeError::StrayNext`] for a successor on an expression-shaped node
pub fn decode_document(doc: Option<&Document>) -> Result<Term, DecodeError> {
    let doc = match doc {
        None | Some(Document::Null) => return Ok(Term::Empty),
        Some(doc) => doc,
    };

    let kind = str_field(doc, "kind")?;

    // Successors are resolved up front; only statement-shaped kinds may
    // carry one.
    let next = match doc.get("next") {
        None | Some(Document::Null) => None,
        Some(succ) => Some(Box::new(decode_document(Some(succ))?)),
    };

    let term = match kind {
        "Empty" => expression(Term::Empty, next)?,
        "Int" => expression(Term::Int(int_field(doc, "value")?), next)?,
        "Str" => expression(Term::Str(str_field(doc, "value")?.to_string()), next)?,
        "Var" => expression(Term::Var(str_field(doc, "text")?.to_string()), next)?,
        "Binary" => expression(
            Term::Binary {
                op: str_field(doc, "op")?.to_string(),
                lhs: Box::new(term_field(doc, "lhs")?),
                rhs: Box::new(term_field(doc, "rhs")?),
            },
            next,
        )?,
        "Call" => expression(
            Term::Call {
                callee: Box::new(term_field(doc, "callee")?),
                arguments: arguments(doc)?,
            },
            next,
        )?,
        "Print" => expression(Term::Print(Box::new(term_field(doc, "value")?)), next)?,
        "First" => expression(Term::First(Box::new(term_field(doc, "value")?)), next)?,
        "Second" => expression(Term::Second(Box::new(term_field(doc, "value")?)), next)?,

        "If" => Term::If {
            condition: Box::new(term_field(doc, "condition")?),
            then: Box::new(term_field(doc, "then")?),
            otherwise: optional_term(doc, "otherwise")?,
            next,
        },
        "Function" => Term::Function {
            parameters: parameters(doc)?,
            body: Box::new(term_field(doc, "value")?),
            next,
        },
        "Let" => Term::Let {
            name: binding_name(doc)?,
            value: Box::new(term_field(doc, "value")?),
            next,
        },
        "Tuple" => Term::Tuple {
            first: Box::new(term_field(doc, "first")?),
            second: Box::new(term_field(doc, "second")?),
            next,
        },

        other => {
            return Err(DecodeError::UnsupportedKind {
                kind: other.to_string(),
            })
        }
    };

    Ok(term)
}

/// Finish an expression-shaped node, rejecting a stray successor.
///
/// The original wire format lets a document attach `next` to any node; for
/// expression-shaped nodes the successor would never be rendered, so the
/// decoder refuses it instead of dropping it silently.
fn expression(term: Term, next: Option<Box<Term>>) -> Result<Term, DecodeError> {
    match next {
        None => Ok(term),
        Some(_) => Err(DecodeError::StrayNext {
            kind: term.kind_name().to_string(),
        }),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Field Extraction
// ═══════════════════════════════════════════════════════════════════════

fn field<'a>(doc: &'a Document, name: &str) -> Result<&'a Document, DecodeError> {
    doc.get(name).ok_or_else(|| DecodeError::MissingField {
        field: name.to_string(),
    })
}

fn str_field<'a>(doc: &'a Document, name: &str) -> Result<&'a str, DecodeError> {
    field(doc, name)?
        .as_str()
        .ok_or_else(|| DecodeError::WrongShape {
            field: name.to_string(),
            expected: "a string",
        })
}

fn int_field(doc: &Document, name: &str) -> Result<i64, DecodeError> {
    field(doc, name)?
        .as_i64()
        .ok_or_else(|| DecodeError::WrongShape {
            field: name.to_string(),
            expected: "an integer",
        })
}

/// Decode a mandatory nested sub-term.
fn term_field(doc: &Document, name: &str) -> Result<Term, DecodeError> {
    decode_document(Some(field(doc, name)?))
}

/// Decode a sub-term that may be structurally absent or `null`.
fn optional_term(doc: &Document, name: &str) -> Result<Option<Box<Term>>, DecodeError> {
    match doc.get(name) {
        None | Some(Document::Null) => Ok(None),
        Some(sub) => Ok(Some(Box::new(decode_document(Some(sub))?))),
    }
}

/// Read a `Let` binding name from the nested `name.text` field.
fn binding_name(doc: &Document) -> Result<String, DecodeError> {
    Ok(str_field(field(doc, "name")?, "text")?.to_string())
}

/// Read an optional `parameters` array of `{ "text": ... }` elements.
fn parameters(doc: &Document) -> Result<Vec<String>, DecodeError> {
    let Some(params) = doc.get("parameters") else {
        return Ok(Vec::new());
    };
    let items = params.as_array().ok_or_else(|| DecodeError::WrongShape {
        field: "parameters".to_string(),
        expected: "an array",
    })?;
    items
        .iter()
        .map(|item| Ok(str_field(item, "text")?.to_string()))
        .collect()
}

/// Read the ordered `arguments` array of nested documents.
fn arguments(doc: &Document) -> Result<Vec<Term>, DecodeError> {
    let items = field(doc, "arguments")?
        .as_array()
        .ok_or_else(|| DecodeError::WrongShape {
            field: "arguments".to_string(),
            expected: "an array",
        })?;
    items
        .iter()
        .map(|item| decode_document(Some(item)))
        .collect()
}
