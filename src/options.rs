use crate::attribute::{Color, Size};
use crate::shirt::Shirt;

// ---------------------------------------------------------------------------
// SearchOptions
// ---------------------------------------------------------------------------

/// The query: which sizes and colors to keep.
///
/// Values within one dimension are ORed; the two dimensions are ANDed.
/// Both dimensions default to empty, and an empty dimension matches every
/// shirt on that axis — so `SearchOptions::default()` is the match-all
/// query. Order within a dimension is irrelevant and duplicates have no
/// effect (membership test only).
///
/// Configure with chained methods, or construct the fields directly.
///
/// # Example
///
/// ```rust
/// use rackline::{Color, SearchOptions, Size};
///
/// let options = SearchOptions::new()
///     .color(Color::Red)
///     .sizes([Size::Small, Size::Medium]);
///
/// assert_eq!(options.colors, vec![Color::Red]);
/// assert_eq!(options.sizes, vec![Size::Small, Size::Medium]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Sizes to keep. Empty means any size.
    pub sizes: Vec<Size>,

    /// Colors to keep. Empty means any color.
    pub colors: Vec<Color>,
}

impl SearchOptions {
    /// Create an empty query — matches every shirt.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Sizes ─────────────────────────────────────────────────────────────

    /// Keep shirts of `size` (in addition to any sizes already requested).
    pub fn size(mut self, size: Size) -> Self {
        self.sizes.push(size);
        self
    }

    /// Keep shirts of any of `sizes`.
    pub fn sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    // ── Colors ────────────────────────────────────────────────────────────

    /// Keep shirts of `color` (in addition to any colors already requested).
    pub fn color(mut self, color: Color) -> Self {
        self.colors.push(color);
        self
    }

    /// Keep shirts of any of `colors`.
    pub fn colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    // ── Predicate ─────────────────────────────────────────────────────────

    /// Returns `true` if `shirt` satisfies this query.
    ///
    /// The match-all rule for an empty dimension is encoded as an explicit
    /// `is_empty` check, not left to fall out of membership tests against
    /// an empty list.
    pub fn matches(&self, shirt: &Shirt) -> bool {
        (self.colors.is_empty() || self.colors.contains(&shirt.color))
            && (self.sizes.is_empty() || self.sizes.contains(&shirt.size))
    }
}
