//! The lexical error type.

use crate::ErrorCode;
use ember_common::{Location, Span};
use thiserror::Error;

/// The only failure the lexer produces.
///
/// Carries the 0-based line and column of the character that triggered it,
/// plus the byte span of that character so it can be rendered against the
/// source. Once returned, the lexer that produced it should not be polled
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({}:{})", location.line, location.column)]
pub struct LexicalError {
    pub code: ErrorCode,
    pub message: String,
    pub location: Location,
    pub span: Span,
}

impl LexicalError {
    pub fn new(code: ErrorCode, message: impl Into<String>, location: Location, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            location,
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }
}
