//! Diagnostic types and builders.

use crate::{ErrorCode, LexicalError};
use ember_common::Span;

/// A labeled span within a diagnostic.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error report with optional labels, notes, and help.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            span,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&LexicalError> for Diagnostic {
    fn from(err: &LexicalError) -> Self {
        // The report header is 1-based; the lexer's own position is 0-based.
        let mut diagnostic = Diagnostic::error(err.span, err.message.clone())
            .with_code(err.code)
            .with_label(Label::new(err.span, err.code.description()))
            .with_note(format!(
                "lexer position {}:{} (0-based line:column)",
                err.line(),
                err.column()
            ));

        if let Some(help) = err.code.suggestion() {
            diagnostic = diagnostic.with_help(help);
        }

        diagnostic
    }
}
