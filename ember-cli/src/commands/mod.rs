//! CLI command implementations.

pub mod check;
pub mod tokens;

use crate::output;
use ember_diagnostic::{emit_error, LexicalError};
use std::fs;

/// Read a source file, mapping I/O failures to a CLI error message.
pub(crate) fn read_source(file: &str) -> Result<String, String> {
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

/// Render a lexical error against its source and turn it into a CLI error.
pub(crate) fn report(source: &str, file: &str, err: &LexicalError) -> String {
    if let Err(io_err) = emit_error(source, file, err) {
        output::error(&format!("failed to render diagnostic: {io_err}"));
        output::error(&err.to_string());
    }
    "lexical error".to_string()
}
