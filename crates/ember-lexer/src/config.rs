//! Lexer configuration and character classification.
//! 词法分析器配置与字符分类。

use serde::{Deserialize, Serialize};

/// Words that lex as `Keyword` instead of `Identifier`.
/// 被识别为 `Keyword` 而非 `Identifier` 的单词。
///
/// `=>` is listed for parsers that check keyword-shaped text; the lexer itself
/// only produces it as an operator, since identifiers never contain `=` or `>`.
pub const KEYWORDS: [&str; 6] = ["if", "else", "=>", "true", "false", "let"];

/// Characters that each form a single punctuation token.
/// 每个字符单独构成一个标点 token。
pub const PUNCTUATION: &str = ".,;(){}[]";

/// Characters that merge into operator tokens.
/// 连续出现时合并为运算符 token 的字符。
pub const OPERATORS: &str = "+-*/%=&|<>!";

/// Space, tab, newline, carriage return, form feed and vertical tab.
/// 空格、制表符、换行、回车、换页和垂直制表符。
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Letters and underscore, in either case.
/// 大小写字母及下划线。
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// How a backslash inside a string literal is treated.
/// 字符串字面量中反斜杠的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeMode {
    /// `\x` becomes `x`.
    #[default]
    Drop,
    /// `\x` stays `\x`, but the escaped character still cannot close the string.
    Keep,
}

/// What a token starting with a given character will be.
/// 以给定字符开头的 token 的类别。
///
/// Produced only by [`LexerConfig::classify`], which checks the classes in
/// declaration order and stops at the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Comment,
    StringStart,
    Digit,
    IdentStart,
    Punctuation,
    Operator,
    Unrecognized,
}

/// Lexer configuration.
/// 词法分析器配置。
///
/// Deserializes from JSON; missing fields keep their defaults.
/// 可从 JSON 反序列化，缺省字段使用默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Identifier texts reported as keywords.
    pub keywords: Vec<String>,
    /// Single-character punctuation set.
    pub punctuation: String,
    /// Operator character set.
    pub operators: String,
    /// Opens and closes string literals.
    pub string_delimiter: char,
    /// Starts a comment running to end of line.
    pub comment_marker: char,
    /// Backslash handling in string literals.
    pub escape_mode: EscapeMode,
    /// Reject string literals that reach end of input unclosed.
    pub strict_strings: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            punctuation: PUNCTUATION.to_string(),
            operators: OPERATORS.to_string(),
            string_delimiter: '\'',
            comment_marker: '#',
            escape_mode: EscapeMode::Drop,
            strict_strings: false,
        }
    }
}

impl LexerConfig {
    /// Create a new configuration with the default language tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the keyword set.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn punctuation(mut self, chars: impl Into<String>) -> Self {
        self.punctuation = chars.into();
        self
    }

    pub fn operators(mut self, chars: impl Into<String>) -> Self {
        self.operators = chars.into();
        self
    }

    pub fn string_delimiter(mut self, delimiter: char) -> Self {
        self.string_delimiter = delimiter;
        self
    }

    pub fn comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    pub fn escape_mode(mut self, mode: EscapeMode) -> Self {
        self.escape_mode = mode;
        self
    }

    pub fn strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| k == text)
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(ch)
    }

    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(ch)
    }

    /// Decide how a token starting with `ch` is read.
    ///
    /// Order matters: comment, string, digit, identifier, punctuation,
    /// operator. A character claimed by an earlier class is never seen by a
    /// later one, so a dialect that puts `#` in its operator set still gets
    /// comments.
    pub fn classify(&self, ch: char) -> CharClass {
        if ch == self.comment_marker {
            CharClass::Comment
        } else if ch == self.string_delimiter {
            CharClass::StringStart
        } else if is_digit(ch) {
            CharClass::Digit
        } else if is_identifier_char(ch) {
            CharClass::IdentStart
        } else if self.is_punctuation(ch) {
            CharClass::Punctuation
        } else if self.is_operator(ch) {
            CharClass::Operator
        } else {
            CharClass::Unrecognized
        }
    }
}
