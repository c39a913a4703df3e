/*!
# Source position type

Location of a character in the scanned text.
*/

use serde::Serialize;
use std::fmt;

/// Position in source code. `line` and `column` are 1-based, `offset` is the
/// byte offset from the start of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// Position of the first character of a text.
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Advances past `ch`, which sits at the current position.
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
