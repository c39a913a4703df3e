//! Stack-based bracket matcher.

use tracing::trace;

use super::brackets::{Bracket, BracketKind};
use super::outcome::Outcome;
use crate::core::Position;

#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    kind: BracketKind,
    at: Position,
}

/// Scans text once, left to right, and stops at the first fault.
#[derive(Debug, Default)]
pub struct BracketScanner {
    stack: Vec<OpenBracket>,
}

impl BracketScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&mut self, source: &str) -> Outcome {
        self.stack.clear();
        let mut pos = Position::start();

        for ch in source.chars() {
            match Bracket::classify(ch) {
                Some(Bracket::Open(kind)) => {
                    trace!(bracket = %ch, at = %pos, depth = self.stack.len() + 1, "push");
                    self.stack.push(OpenBracket { kind, at: pos });
                }
                Some(Bracket::Close(kind)) => {
                    let Some(open) = self.stack.pop() else {
                        return Outcome::ExtraClosing { found: ch, at: pos };
                    };
                    trace!(bracket = %ch, at = %pos, depth = self.stack.len(), "pop");
                    if open.kind != kind {
                        return Outcome::Mismatched {
                            opened: open.kind.open_char(),
                            opened_at: open.at,
                            found: ch,
                            at: pos,
                        };
                    }
                }
                None => {}
            }
            pos.advance(ch);
        }

        match self.stack.first() {
            Some(earliest) => Outcome::Unclosed {
                opened: earliest.kind.open_char(),
                at: earliest.at,
                unclosed_count: self.stack.len(),
            },
            None => Outcome::Balanced,
        }
    }
}
