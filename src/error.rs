use thiserror::Error;

/// Errors produced when parsing attribute values from text.
///
/// The search operation itself is infallible — every combination of options
/// and collection yields a well-defined result — so the
/// [`FromStr`](std::str::FromStr) surface on [`Size`](crate::Size) and
/// [`Color`](crate::Color) is the only fallible path in the crate. The
/// offending input is carried verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown size")]
    UnknownSize(String),

    #[error("unknown color")]
    UnknownColor(String),
}

impl ParseError {
    /// The input that failed to parse.
    /// Callers use this to present "not a size: <input>" without pattern
    /// matching on variants.
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownSize(s) | Self::UnknownColor(s) => s,
        }
    }
}
