//! # Dodeca Shape
//!
//! The marker shapes circles are drawn with, and the conversions the UI
//! layer binds to.
//!
//! A [`Shape`] has three encodings:
//!
//! ```text
//! Shape::Cross ── to_index ──▶ 2       (spinner position)
//!        ▲ ◀──── from_index ── 2
//!        │
//!        └────── parse_or_none ── "CROSS"   (canonical name)
//! ```
//!
//! Index and name lookups are strict. The lenient paths that substitute a
//! default ([`preference::decode_preference`], [`Shape::index_or_first`])
//! log the substitution.

pub mod binding;
pub mod error;
pub mod preference;
pub mod shape;

pub use binding::{IndexBinding, ShapeSpinner};
pub use error::ShapeError;
pub use preference::{
    DecodedPreference, SHAPE_PREFERENCE_KEY, decode_preference, encode_preference, read_preference,
};
pub use shape::Shape;
