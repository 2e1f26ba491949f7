//! Character cursor with line/column tracking.
//! 带行列跟踪的字符游标。

use ember_common::{Location, Span};
use ember_diagnostic::{ErrorCode, LexicalError};

/// Walks the source one character at a time.
/// 逐个字符遍历源代码。
///
/// `position` is a byte offset into the source and only ever grows. Line and
/// column are derived from the characters consumed so far.
/// `position` 是源码中的字节偏移量，只会增长。行列号由已消耗的字符推导得出。
pub struct Cursor<'src> {
    /// The full source text
    /// 完整的源代码
    source: &'src str,
    /// Byte offset of the next character
    /// 下一个字符的字节偏移量
    position: usize,
    /// Line and column of the next character
    /// 下一个字符的行列号
    location: Location,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    /// 在 `source` 起始处创建游标。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            location: Location::START,
        }
    }

    /// Consume and return the current character.
    /// 消耗并返回当前字符。
    ///
    /// Returns `None` at end of input without moving.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        self.location = self.location.step(ch);
        Some(ch)
    }

    /// Look at the current character without consuming it.
    /// 查看当前字符但不消耗它。
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Returns true once every character has been consumed.
    /// 所有字符都被消耗后返回 true。
    pub fn at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Consume the maximal run of characters matching `predicate`.
    /// 消耗满足 `predicate` 的最长连续字符序列。
    pub fn read_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Build an error pointing at the current character.
    /// 构造一个指向当前字符的错误。
    ///
    /// This does not move the cursor; the caller returns the error.
    pub fn fail(&self, code: ErrorCode, message: impl Into<String>) -> LexicalError {
        LexicalError::new(code, message, self.location, self.current_span())
    }

    /// Span of the current character, or an empty span at end of input.
    fn current_span(&self) -> Span {
        match self.peek() {
            Some(ch) => Span::from_usize(self.position, self.position + ch.len_utf8()),
            None => Span::point(self.position),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// The whole input, independent of how much has been consumed.
    /// 完整的输入文本，与已消费的位置无关。
    pub fn source(&self) -> &'src str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_iterates_characters() {
        let mut cursor = Cursor::new("a sd");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some(' '));
        assert_eq!(cursor.advance(), Some('s'));
        assert_eq!(cursor.advance(), Some('d'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = Cursor::new("asd");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek(), Some('s'));
        assert_eq!(cursor.peek(), Some('s'));
        assert_eq!(cursor.advance(), Some('s'));
        assert_eq!(cursor.advance(), Some('d'));
    }

    #[test]
    fn test_at_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.at_end());
        cursor.advance();
        assert!(cursor.at_end());
        assert!(Cursor::new("").at_end());
    }

    #[test]
    fn test_advance_past_end_keeps_position() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (0, 2));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 0));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é1");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn test_read_while() {
        let mut cursor = Cursor::new("abc123");
        assert_eq!(cursor.read_while(|c| c.is_ascii_alphabetic()), "abc");
        assert_eq!(cursor.read_while(|c| c.is_ascii_alphabetic()), "");
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn test_fail_reports_line_and_column() {
        let mut cursor = Cursor::new("a\nsd");
        for _ in 0..4 {
            cursor.advance();
        }
        let err = cursor.fail(ErrorCode::UnexpectedCharacter, "failedasd");
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 2);
        assert_eq!(err.to_string(), "failedasd (1:2)");
        assert!(err.span.is_empty());
    }

    #[test]
    fn test_fail_spans_current_character() {
        let mut cursor = Cursor::new("1$");
        cursor.advance();
        let err = cursor.fail(ErrorCode::UnexpectedCharacter, "bad");
        assert_eq!(err.span.range(), 1..2);
        assert_eq!(cursor.position(), 1);
    }
}
