use crate::attribute::{Color, Size};
use crate::options::SearchOptions;
use crate::results::{ColorCount, SearchResults, SizeCount};
use crate::shirt::Shirt;

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Searches a fixed in-memory shirt collection.
///
/// The engine owns the collection handed to [`new`](SearchEngine::new) and
/// treats it as read-only. [`search`](SearchEngine::search) takes `&self`
/// and holds no mutable state of its own, so one engine can serve any
/// number of queries — including concurrent read-only callers, with nothing
/// to synchronize.
pub struct SearchEngine {
    shirts: Vec<Shirt>,
}

impl SearchEngine {
    /// Create an engine over `shirts`.
    ///
    /// Shirts are assumed well-formed; ids are not checked for duplicates.
    /// An empty collection is valid — every search then returns no matches
    /// and all-zero counts.
    pub fn new(shirts: Vec<Shirt>) -> Self {
        Self { shirts }
    }

    /// The underlying collection, in insertion order.
    pub fn shirts(&self) -> &[Shirt] {
        &self.shirts
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Filter the collection against `options` and count the matches per
    /// size and per color.
    ///
    /// The filter is stable: matches come back in the collection's own
    /// order, never re-sorted. Counts are dense — exactly one entry per
    /// [`Size::ALL`] and [`Color::ALL`] member, zeros included — and are
    /// computed over the *matches*, not the whole collection: searching for
    /// red and reading the medium count answers "how many of the red shirts
    /// are medium".
    ///
    /// Pure — the result is a function of the collection at construction
    /// time and `options`, and calling again with the same options yields
    /// an identical result.
    pub fn search(&self, options: &SearchOptions) -> SearchResults<'_> {
        let shirts: Vec<&Shirt> = self
            .shirts
            .iter()
            .filter(|shirt| options.matches(shirt))
            .collect();

        let size_counts = Size::ALL
            .iter()
            .map(|&size| SizeCount {
                size,
                count: shirts.iter().filter(|s| s.size == size).count(),
            })
            .collect();

        let color_counts = Color::ALL
            .iter()
            .map(|&color| ColorCount {
                color,
                count: shirts.iter().filter(|s| s.color == color).count(),
            })
            .collect();

        SearchResults {
            shirts,
            size_counts,
            color_counts,
        }
    }
}
