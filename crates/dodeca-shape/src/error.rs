//! Error types for shape conversions.

/// Errors arising from converting external data into a [`Shape`](crate::Shape).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// An index outside `0..len` was supplied where a shape position was expected.
    ///
    /// `index` is wide enough to hold any `i64` or `usize` input unchanged.
    #[error("shape index {index} out of range (expected 0..{len})")]
    IndexOutOfRange { index: i128, len: usize },

    /// Text that is not a canonical shape name.
    #[error("unknown shape name: {0:?}")]
    UnknownName(String),
}
