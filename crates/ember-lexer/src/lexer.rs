//! The Ember lexer.
//! Ember 词法分析器。

use crate::config::{is_digit, is_identifier_char, is_whitespace, CharClass, EscapeMode, LexerConfig};
use crate::cursor::Cursor;
use crate::token::Token;
use ember_common::Location;
use ember_diagnostic::{ErrorCode, LexicalError};
use tracing::{debug, trace};

/// The Ember lexer.
/// Ember 词法分析器。
///
/// Pulls tokens out of a [`Cursor`] on demand, holding at most one token of
/// lookahead. A returned [`LexicalError`] ends the stream; the lexer is not
/// meant to be polled again afterwards.
/// 按需从 [`Cursor`] 中读取 token，最多保留一个前瞻 token。返回 [`LexicalError`] 后词法分析结束。
pub struct Lexer<'src> {
    /// Character source with position info
    /// 带位置信息的字符源
    cursor: Cursor<'src>,
    /// Keyword and character tables
    /// 关键字和字符表
    config: LexerConfig,
    /// Lookahead token, filled by `peek_token`
    /// 由 `peek_token` 填充的前瞻 token
    current: Option<Token>,
    /// Set once the iterator has yielded an error
    /// 迭代器产出错误后置位
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a lexer using a custom dialect.
    /// 使用自定义方言创建词法分析器。
    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            current: None,
            failed: false,
        }
    }

    /// The dialect this lexer was built with.
    /// 此词法分析器所使用的方言配置。
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Where the underlying cursor currently is.
    /// 底层游标的当前位置。
    ///
    /// After a `peek_token` this is past the peeked token.
    pub fn location(&self) -> Location {
        self.cursor.location()
    }

    /// Return the next token without consuming it.
    /// 返回下一个 token 但不消耗它。
    pub fn peek_token(&mut self) -> Result<Option<&Token>, LexicalError> {
        if self.current.is_none() {
            self.current = self.scan_next()?;
        }
        Ok(self.current.as_ref())
    }

    /// Return and consume the next token.
    /// 返回并消耗下一个 token。
    pub fn next_token(&mut self) -> Result<Option<Token>, LexicalError> {
        match self.current.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan_next(),
        }
    }

    /// Returns true when no tokens remain.
    /// 没有剩余 token 时返回 true。
    pub fn at_end(&mut self) -> Result<bool, LexicalError> {
        Ok(self.peek_token()?.is_none())
    }

    /// Tokenize the rest of the source.
    /// 对剩余源代码进行词法分析。
    pub fn tokenize(self) -> Result<Vec<Token>, LexicalError> {
        self.collect()
    }

    /// Scan one token from the cursor, skipping whitespace and comments.
    /// 从游标扫描一个 token，跳过空白和注释。
    fn scan_next(&mut self) -> Result<Option<Token>, LexicalError> {
        loop {
            self.cursor.read_while(is_whitespace);

            let Some(ch) = self.cursor.peek() else {
                return Ok(None);
            };

            let token = match self.config.classify(ch) {
                CharClass::Comment => {
                    self.skip_line();
                    continue;
                }
                CharClass::StringStart => self.read_string(ch)?,
                CharClass::Digit => self.read_number()?,
                CharClass::IdentStart => self.read_identifier(),
                CharClass::Punctuation => {
                    self.cursor.advance();
                    Token::punctuation(ch)
                }
                CharClass::Operator => {
                    let config = &self.config;
                    Token::operator(self.cursor.read_while(|c| config.is_operator(c)))
                }
                CharClass::Unrecognized => {
                    return Err(self.fail(
                        ErrorCode::UnexpectedCharacter,
                        format!("Error while reading character: {ch}, don't know how to process"),
                    ));
                }
            };

            trace!(%token, location = %self.cursor.location(), "scanned token");
            return Ok(Some(token));
        }
    }

    /// Skip a line comment, including its newline.
    /// 跳过行注释（包括换行符）。
    fn skip_line(&mut self) {
        let start = self.cursor.location();
        self.cursor.read_while(|c| c != '\n');
        self.cursor.advance();
        debug!(line = start.line, "skipped comment");
    }

    /// Read digits with at most one decimal point.
    /// 读取最多包含一个小数点的数字。
    fn read_number(&mut self) -> Result<Token, LexicalError> {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.cursor.peek() {
            if ch == '.' {
                if seen_dot {
                    return Err(self.fail(ErrorCode::UnexpectedDot, "Unexpected dot in number"));
                }
                seen_dot = true;
            } else if !is_digit(ch) {
                break;
            }
            text.push(ch);
            self.cursor.advance();
        }

        match text.parse::<f64>() {
            Ok(value) => Ok(Token::number(value)),
            Err(_) => Err(self.fail(
                ErrorCode::InvalidNumber,
                format!("Invalid number literal: {text}"),
            )),
        }
    }

    /// Read an identifier, or a keyword if the text is in the keyword set.
    /// 读取标识符；若文本在关键字集合中则为关键字。
    fn read_identifier(&mut self) -> Token {
        let text = self.cursor.read_while(is_identifier_char);
        if self.config.is_keyword(&text) {
            Token::keyword(text)
        } else {
            Token::identifier(text)
        }
    }

    fn read_string(&mut self, delimiter: char) -> Result<Token, LexicalError> {
        let (text, terminated) = self.read_escaped(delimiter);
        if !terminated && self.config.strict_strings {
            return Err(self.fail(ErrorCode::UnterminatedString, "Unterminated string literal"));
        }
        Ok(Token::string(text))
    }

    /// Read text up to an unescaped `delimiter`.
    /// 读取直到未转义的 `delimiter` 为止的文本。
    ///
    /// The opening and closing delimiters are consumed but not kept. Returns
    /// the text and whether a closing delimiter was found before end of input.
    fn read_escaped(&mut self, delimiter: char) -> (String, bool) {
        let mut text = String::new();
        let mut escaped = false;

        self.cursor.advance();
        while let Some(ch) = self.cursor.advance() {
            if escaped {
                if self.config.escape_mode == EscapeMode::Keep {
                    text.push('\\');
                }
                text.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == delimiter {
                return (text, true);
            } else {
                text.push(ch);
            }
        }

        // Dangling backslash at end of input.
        if escaped && self.config.escape_mode == EscapeMode::Keep {
            text.push('\\');
        }
        (text, false)
    }

    fn fail(&self, code: ErrorCode, message: impl Into<String>) -> LexicalError {
        let err = self.cursor.fail(code, message);
        debug!(code = %err.code, location = %err.location, "lexical error: {}", err.message);
        err
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
