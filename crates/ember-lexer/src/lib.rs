//! Lexical analysis for Ember.
//! Ember 词法分析模块。
//!
//! This crate provides the lexer that converts source text into tokens,
//! one token at a time with a single token of lookahead.
//! 本 crate 提供词法分析器，按需逐个将源代码转换为 token，并支持一个 token 的前瞻。

mod config;
mod cursor;
mod lexer;
mod token;

pub use config::{
    is_digit, is_identifier_char, is_whitespace, CharClass, EscapeMode, LexerConfig, KEYWORDS,
    OPERATORS, PUNCTUATION,
};
pub use cursor::Cursor;
pub use ember_diagnostic::LexicalError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
