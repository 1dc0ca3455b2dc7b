//! The closed set of marker shapes.
//!
//! Declaration order is the integer encoding: the spinner stores the
//! selected shape as its position, so reordering variants silently
//! changes what saved selections decode to.

use crate::error::ShapeError;

/// A marker shape circles can be drawn with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    /// Filled or outlined circle. The default.
    #[default]
    Circle,
    Square,
    Cross,
    VerticalBar,
    HorizontalBar,
}

impl Shape {
    /// Number of shapes.
    pub const COUNT: usize = 5;

    /// Every shape, in index order.
    pub const ALL: [Shape; Self::COUNT] = [
        Self::Circle,
        Self::Square,
        Self::Cross,
        Self::VerticalBar,
        Self::HorizontalBar,
    ];

    /// Iterate shapes in index order.
    pub fn iter() -> impl Iterator<Item = Shape> {
        Self::ALL.into_iter()
    }

    /// The canonical name, e.g. `VERTICAL_BAR`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "CIRCLE",
            Self::Square => "SQUARE",
            Self::Cross => "CROSS",
            Self::VerticalBar => "VERTICAL_BAR",
            Self::HorizontalBar => "HORIZONTAL_BAR",
        }
    }

    /// Drawable resource name shown in the shape spinner.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Circle => "ic_circle",
            Self::Square => "ic_square",
            Self::Cross => "ic_cross",
            Self::VerticalBar => "ic_vertical_bar",
            Self::HorizontalBar => "ic_horizontal_bar",
        }
    }

    /// Look up a shape by its exact canonical name.
    ///
    /// Matching is case-sensitive and does no trimming: `"CROSS"` is found,
    /// `"cross"` and `" CROSS"` are not.
    pub fn parse_or_none(name: &str) -> Option<Shape> {
        Self::iter().find(|shape| shape.name() == name)
    }

    /// Position of the shape in declaration order.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The shape at `index`, the exact inverse of [`Shape::to_index`].
    pub fn from_index(index: i64) -> Result<Shape, ShapeError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ShapeError::IndexOutOfRange {
                index: i128::from(index),
                len: Self::COUNT,
            })
    }

    /// Like [`Shape::from_index`], but falls back to the first shape.
    pub fn index_or_first(index: i64) -> Shape {
        Self::from_index(index).unwrap_or_else(|err| {
            log::warn!("{err}; using {}", Self::ALL[0]);
            Self::ALL[0]
        })
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_or_none(s).ok_or_else(|| ShapeError::UnknownName(s.to_string()))
    }
}

impl From<Shape> for usize {
    fn from(shape: Shape) -> Self {
        shape.to_index()
    }
}

impl TryFrom<i64> for Shape {
    type Error = ShapeError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl TryFrom<usize> for Shape {
    type Error = ShapeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ShapeError::IndexOutOfRange {
                index: index as i128,
                len: Self::COUNT,
            })
    }
}
