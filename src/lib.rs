//! # rackline
//!
//! In-memory garment inventory search — filter by size and color, with
//! faceted counts over the matches.
//!
//! rackline is a single-pass filter-and-aggregate engine. It owns the shirt
//! record ([`Shirt`]), the closed attribute sets ([`Size`], [`Color`]), the
//! query object ([`SearchOptions`]), and the engine itself
//! ([`SearchEngine`]). It does **not** own persistence, indexing, ranking,
//! pagination, or rendering of results — those belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use rackline::{Color, SearchEngine, SearchOptions, Shirt, Size};
//! use uuid::Uuid;
//!
//! let engine = SearchEngine::new(vec![
//!     Shirt::new(Uuid::new_v4(), "Red - Small", Size::Small, Color::Red),
//!     Shirt::new(Uuid::new_v4(), "Black - Medium", Size::Medium, Color::Black),
//!     Shirt::new(Uuid::new_v4(), "Blue - Large", Size::Large, Color::Blue),
//! ]);
//!
//! let results = engine.search(&SearchOptions::new().color(Color::Red));
//!
//! assert_eq!(results.matches(), 1);
//! assert_eq!(results.shirts[0].name, "Red - Small");
//! ```
//!
//! # Filtering semantics
//!
//! Values within one dimension are ORed; the size and color dimensions are
//! ANDed. An empty dimension matches everything on that axis, so the
//! default (empty) options return the whole collection:
//!
//! ```rust
//! use rackline::{Color, SearchEngine, SearchOptions, Shirt, Size};
//! use uuid::Uuid;
//!
//! let engine = SearchEngine::new(vec![
//!     Shirt::new(Uuid::new_v4(), "Red - Small", Size::Small, Color::Red),
//!     Shirt::new(Uuid::new_v4(), "Red - Large", Size::Large, Color::Red),
//!     Shirt::new(Uuid::new_v4(), "Blue - Large", Size::Large, Color::Blue),
//! ]);
//!
//! // Empty options keep everything, in input order.
//! assert_eq!(engine.search(&SearchOptions::default()).matches(), 3);
//!
//! // Dimensions are ANDed: red AND large.
//! let results = engine.search(&SearchOptions::new().color(Color::Red).size(Size::Large));
//! assert_eq!(results.matches(), 1);
//! assert_eq!(results.shirts[0].name, "Red - Large");
//! ```
//!
//! # Faceted counts
//!
//! Every search also reports how the *matches* break down by size and by
//! color — one entry per legal value, zeros included, always in the
//! [`Size::ALL`] / [`Color::ALL`] order:
//!
//! ```rust
//! use rackline::{Color, SearchEngine, SearchOptions, Shirt, Size};
//! use uuid::Uuid;
//!
//! let engine = SearchEngine::new(vec![
//!     Shirt::new(Uuid::new_v4(), "Red - Small", Size::Small, Color::Red),
//!     Shirt::new(Uuid::new_v4(), "Red - Medium", Size::Medium, Color::Red),
//!     Shirt::new(Uuid::new_v4(), "Black - Medium", Size::Medium, Color::Black),
//! ]);
//!
//! let results = engine.search(&SearchOptions::new().color(Color::Red));
//!
//! // Counts describe the two red matches, not the whole inventory.
//! let medium = results.size_counts.iter().find(|c| c.size == Size::Medium).unwrap();
//! assert_eq!(medium.count, 1);
//!
//! // Every legal color appears, zeros included.
//! assert_eq!(results.color_counts.len(), Color::ALL.len());
//! ```

#![forbid(unsafe_code)]

mod attribute;
mod engine;
mod error;
mod options;
mod results;
mod shirt;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use attribute::{Color, Size};
pub use engine::SearchEngine;
pub use error::ParseError;
pub use options::SearchOptions;
pub use results::{ColorCount, SearchResults, SizeCount};
pub use shirt::Shirt;
