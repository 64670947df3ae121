use uuid::Uuid;

use crate::attribute::{Color, Size};

/// A single garment in the searchable inventory.
///
/// Immutable once constructed — the engine never writes to it, and search
/// results borrow shirts straight out of the engine's collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Shirt {
    /// Opaque unique identifier. The crate never inspects it; it exists so
    /// callers can correlate results with their own records.
    pub id: Uuid,

    /// Display name, e.g. `"Red - Small"`.
    pub name: String,

    /// The shirt's size.
    pub size: Size,

    /// The shirt's color.
    pub color: Color,
}

impl Shirt {
    /// Create a new shirt.
    pub fn new(id: Uuid, name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color,
        }
    }
}
