use crate::attribute::{Color, Size};
use crate::shirt::Shirt;

/// The output of a completed search.
///
/// Borrows from the engine that produced it: [`shirts`](SearchResults::shirts)
/// holds references into the engine's collection, so results cannot outlive
/// the engine. Callers that need owned data clone explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    /// Shirts that matched the query, in the collection's own order.
    pub shirts: Vec<&'a Shirt>,

    /// Matches per size, computed over the filtered set. Dense: one entry
    /// per [`Size::ALL`] member, in that order, zero counts included.
    pub size_counts: Vec<SizeCount>,

    /// Matches per color, computed over the filtered set. Dense like
    /// [`size_counts`](SearchResults::size_counts).
    pub color_counts: Vec<ColorCount>,
}

impl SearchResults<'_> {
    /// Total number of shirts that matched the query.
    pub fn matches(&self) -> usize {
        self.shirts.len()
    }
}

/// How many of the matches carry one particular size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCount {
    pub size: Size,
    pub count: usize,
}

/// How many of the matches carry one particular color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    pub color: Color,
    pub count: usize,
}
