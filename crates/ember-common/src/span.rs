//! Byte ranges into the source text.
//! 指向源码的字节区间。

use std::fmt;

/// A byte offset into the source.
/// 源码中的字节偏移量。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(pos as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

/// The bytes covered by one character, or an empty range at end of input.
/// 一个字符所占的字节区间；在输入结束处为空区间。
///
/// Offsets are bytes, not characters; renderers must be told so.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// First byte. / 起始字节。
    pub start: BytePos,
    /// One past the last byte. / 结束字节（不包含）。
    pub end: BytePos,
}

impl Span {
    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: BytePos::from(start),
            end: BytePos::from(end),
        }
    }

    /// An empty span sitting at `pos`.
    /// 位于 `pos` 的空范围。
    pub fn point(pos: usize) -> Self {
        Span::from_usize(pos, pos)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range` for slicing or rendering.
    /// 将范围转换为 `Range`，用于切片或渲染。
    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
