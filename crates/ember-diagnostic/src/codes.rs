//! Error codes for Ember diagnostics.

/// Error codes for categorizing lexical failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedCharacter,
    UnexpectedDot,
    InvalidNumber,
    UnterminatedString,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnexpectedDot => "E0002",
            ErrorCode::InvalidNumber => "E0003",
            ErrorCode::UnterminatedString => "E0004",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnexpectedDot => "number literal contains more than one decimal point",
            ErrorCode::InvalidNumber => "invalid number literal",
            ErrorCode::UnterminatedString => "string literal is not terminated",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnexpectedDot => Some("remove the extra `.` from the number"),
            ErrorCode::UnterminatedString => Some("add a closing `'` to terminate the string"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
