//! Errors raised at the crate's external boundaries.
//!
//! Tree-invariant breaches (splicing past a sentinel, navigating out of a
//! parentless atom, a script attachment with neither slot) are programming
//! errors and panic immediately rather than appearing here.

use thiserror::Error;

/// Raised by the parsing collaborator when text cannot be converted into
/// document fragments, e.g. on pasting malformed markup. The operation that
/// triggered the parse is abandoned and the document is left unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("parse error: {0}")]
pub struct ParseError(pub String);

/// Raised at the computation-service boundary. These are logged and
/// discarded by [`crate::engine::Engine`]; the document is never touched by
/// a failed computation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("engine error: {0}")]
pub struct EngineError(pub String);
