//! Result of a bracket scan.

use serde::Serialize;
use std::fmt;

use crate::core::Position;

/// The single diagnostic a scan produces.
///
/// `Display` renders the line printed by the CLI in text mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Every opener was closed by the matching closer.
    Balanced,
    /// A closer appeared with nothing open.
    ExtraClosing { found: char, at: Position },
    /// A closer did not match the most recent opener.
    Mismatched {
        opened: char,
        opened_at: Position,
        found: char,
        at: Position,
    },
    /// Input ended with openers still on the stack. `opened` is the earliest.
    Unclosed {
        opened: char,
        at: Position,
        unclosed_count: usize,
    },
}

impl Outcome {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Outcome::Balanced)
    }

    /// Line the report points at.
    pub fn line(&self) -> Option<usize> {
        match self {
            Outcome::Balanced => None,
            Outcome::ExtraClosing { at, .. }
            | Outcome::Mismatched { at, .. }
            | Outcome::Unclosed { at, .. } => Some(at.line),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Balanced => write!(f, "All balanced"),
            Outcome::ExtraClosing { found, at } => {
                write!(f, "Extra closing {} at {}", found, at.line)
            }
            Outcome::Mismatched { opened, found, at, .. } => {
                write!(f, "Mismatched {} vs {} at {}", opened, found, at.line)
            }
            Outcome::Unclosed { opened, at, .. } => {
                write!(f, "Unclosed {} opened at line {}", opened, at.line)
            }
        }
    }
}
