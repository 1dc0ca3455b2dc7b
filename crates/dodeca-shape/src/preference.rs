//! Shape selection stored as a text preference.
//!
//! Stored values are written as the lower-case name (`vertical_bar`) and
//! read back ignoring case. Anything that does not name a shape decodes to
//! the caller's default.

use crate::shape::Shape;

/// Preference key the shape selection is stored under.
pub const SHAPE_PREFERENCE_KEY: &str = "shape";

/// Result of decoding a stored shape preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedPreference {
    pub shape: Shape,
    /// True when the stored value was missing or unreadable and the
    /// default was used instead.
    pub substituted: bool,
}

/// Decode a stored shape preference, substituting `default` when the value
/// is missing or unreadable.
pub fn decode_preference(raw: Option<&str>, default: Shape) -> DecodedPreference {
    let Some(raw) = raw else {
        log::debug!("preference {SHAPE_PREFERENCE_KEY:?} unset; using {default}");
        return DecodedPreference {
            shape: default,
            substituted: true,
        };
    };
    match read_preference(raw) {
        Some(shape) => DecodedPreference {
            shape,
            substituted: false,
        },
        None => {
            log::warn!(
                "preference {SHAPE_PREFERENCE_KEY:?} has unknown shape {raw:?}; using {default}"
            );
            DecodedPreference {
                shape: default,
                substituted: true,
            }
        }
    }
}

/// Read a stored shape preference without substituting anything.
///
/// Case is ignored; whitespace is not.
pub fn read_preference(raw: &str) -> Option<Shape> {
    Shape::parse_or_none(&raw.to_uppercase())
}

/// Text written back for a shape preference.
pub fn encode_preference(shape: Shape) -> String {
    shape.name().to_lowercase()
}
