//! Line and column locations.

use std::fmt;

/// A 0-based line/column pair.
///
/// Columns count characters, not bytes, and reset to zero after every
/// newline.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub const START: Location = Location { line: 0, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The location after consuming `ch` from here.
    pub fn step(self, ch: char) -> Location {
        if ch == '\n' {
            Location {
                line: self.line + 1,
                column: 0,
            }
        } else {
            Location {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
