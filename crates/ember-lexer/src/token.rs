//! Token definitions for Ember.
//! Ember 的 token 定义。

use serde::Serialize;
use std::fmt;

/// A single lexical unit.
/// 单个词法单元。
///
/// Each variant fixes the kind and the type of its value, so a `Number`
/// always holds a parsed value and every other kind holds text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    Number(f64),
    Keyword(String),
    Identifier(String),
    Operator(String),
    Punctuation(String),
    String(String),
}

impl Token {
    pub fn number(value: f64) -> Self {
        Token::Number(value)
    }

    pub fn keyword(value: impl Into<String>) -> Self {
        Token::Keyword(value.into())
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Token::Identifier(value.into())
    }

    pub fn operator(value: impl Into<String>) -> Self {
        Token::Operator(value.into())
    }

    /// Punctuation is always a single character.
    /// 标点始终是单个字符。
    pub fn punctuation(value: char) -> Self {
        Token::Punctuation(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Token::String(value.into())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Operator(_) => TokenKind::Operator,
            Token::Punctuation(_) => TokenKind::Punctuation,
            Token::String(_) => TokenKind::String,
        }
    }

    /// The numeric value of a `Number` token.
    /// `Number` token 的数值。
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The text of any non-numeric token.
    /// 非数字 token 的文本。
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Number(_) => None,
            Token::Keyword(text)
            | Token::Identifier(text)
            | Token::Operator(text)
            | Token::Punctuation(text)
            | Token::String(text) => Some(text),
        }
    }

    /// Returns true if this is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Token::Keyword(text) if text == word)
    }

    /// Returns true if this is the punctuation character `ch`.
    pub fn is_punctuation(&self, ch: char) -> bool {
        match self {
            Token::Punctuation(text) => text.chars().eq(std::iter::once(ch)),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}({})", self.kind(), value),
            Token::String(text) => write!(f, "{}({:?})", self.kind(), text),
            Token::Keyword(text)
            | Token::Identifier(text)
            | Token::Operator(text)
            | Token::Punctuation(text) => write!(f, "{}({})", self.kind(), text),
        }
    }
}

/// The kind of a token, without its value.
/// 不含值的 token 类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Number,
    Keyword,
    Identifier,
    Operator,
    Punctuation,
    String,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Number,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "Number",
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::String => "String",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_fix_kind() {
        assert_eq!(Token::number(123.0).kind(), TokenKind::Number);
        assert_eq!(Token::keyword("let").kind(), TokenKind::Keyword);
        assert_eq!(Token::identifier("anIdentifier").kind(), TokenKind::Identifier);
        assert_eq!(Token::operator("+").kind(), TokenKind::Operator);
        assert_eq!(Token::punctuation('{').kind(), TokenKind::Punctuation);
        assert_eq!(Token::string("a string value").kind(), TokenKind::String);
    }

    #[test]
    fn test_values() {
        assert_eq!(Token::number(123.0).as_number(), Some(123.0));
        assert_eq!(Token::number(123.0).as_text(), None);
        assert_eq!(Token::punctuation('{').as_text(), Some("{"));
        assert_eq!(Token::string("a string value").as_text(), Some("a string value"));
        assert_eq!(Token::keyword("let").as_number(), None);
    }

    #[test]
    fn test_equality_is_kind_and_value() {
        assert_eq!(Token::identifier("x"), Token::identifier("x"));
        assert_ne!(Token::identifier("let"), Token::keyword("let"));
        assert_ne!(Token::operator("="), Token::operator("=="));
        assert_ne!(Token::string("("), Token::punctuation('('));
    }

    #[test]
    fn test_predicates() {
        assert!(Token::keyword("if").is_keyword("if"));
        assert!(!Token::identifier("if").is_keyword("if"));
        assert!(Token::punctuation(';').is_punctuation(';'));
        assert!(!Token::operator(";").is_punctuation(';'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::number(100.0).to_string(), "Number(100)");
        assert_eq!(Token::number(1.5).to_string(), "Number(1.5)");
        assert_eq!(Token::keyword("let").to_string(), "Keyword(let)");
        assert_eq!(Token::string("a'b").to_string(), "String(\"a'b\")");
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<_> = TokenKind::ALL.iter().map(TokenKind::as_str).collect();
        assert_eq!(
            names,
            ["Number", "Keyword", "Identifier", "Operator", "Punctuation", "String"]
        );
    }
}
