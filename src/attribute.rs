use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A shirt size.
///
/// The set of legal sizes is closed and small — a fixed list of named
/// values, not an open-ended string. [`Size::ALL`] exposes the canonical
/// order that count sequences follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every legal size, in canonical order.
    ///
    /// Aggregation iterates this list, so count sequences always carry
    /// exactly one entry per member, in this order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// The display name of this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small  => "Small",
            Self::Medium => "Medium",
            Self::Large  => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Size {
    type Err = ParseError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .iter()
            .copied()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownSize(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A shirt color.
///
/// Closed like [`Size`]; [`Color::ALL`] is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    White,
    Black,
}

impl Color {
    /// Every legal color, in canonical order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Black,
    ];

    /// The display name of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red    => "Red",
            Self::Blue   => "Blue",
            Self::Yellow => "Yellow",
            Self::White  => "White",
            Self::Black  => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}
