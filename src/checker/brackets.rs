//! Bracket classification.

use serde::Serialize;

/// One bracket family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketKind {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
}

impl BracketKind {
    pub const ALL: [BracketKind; 3] = [BracketKind::Paren, BracketKind::Square, BracketKind::Curly];

    pub fn from_opener(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(BracketKind::Paren),
            '[' => Some(BracketKind::Square),
            '{' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    pub fn from_closer(ch: char) -> Option<Self> {
        match ch {
            ')' => Some(BracketKind::Paren),
            ']' => Some(BracketKind::Square),
            '}' => Some(BracketKind::Curly),
            _ => None,
        }
    }

    pub fn open_char(self) -> char {
        match self {
            BracketKind::Paren => '(',
            BracketKind::Square => '[',
            BracketKind::Curly => '{',
        }
    }

    pub fn close_char(self) -> char {
        match self {
            BracketKind::Paren => ')',
            BracketKind::Square => ']',
            BracketKind::Curly => '}',
        }
    }
}

/// A character that takes part in bracket matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open(BracketKind),
    Close(BracketKind),
}

impl Bracket {
    pub fn classify(ch: char) -> Option<Self> {
        BracketKind::from_opener(ch)
            .map(Bracket::Open)
            .or_else(|| BracketKind::from_closer(ch).map(Bracket::Close))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closer_maps_to_expected_opener() {
        assert_eq!(BracketKind::from_closer(')').map(BracketKind::open_char), Some('('));
        assert_eq!(BracketKind::from_closer(']').map(BracketKind::open_char), Some('['));
        assert_eq!(BracketKind::from_closer('}').map(BracketKind::open_char), Some('{'));
    }

    #[test]
    fn test_chars_round_trip_per_kind() {
        for kind in BracketKind::ALL {
            assert_eq!(BracketKind::from_opener(kind.open_char()), Some(kind));
            assert_eq!(BracketKind::from_closer(kind.close_char()), Some(kind));
        }
    }

    #[test]
    fn test_classify_ignores_other_chars() {
        assert_eq!(Bracket::classify('{'), Some(Bracket::Open(BracketKind::Curly)));
        assert_eq!(Bracket::classify(']'), Some(Bracket::Close(BracketKind::Square)));
        for ch in ['<', '>', 'a', '\n', '"', '\''] {
            assert_eq!(Bracket::classify(ch), None);
        }
    }
}
