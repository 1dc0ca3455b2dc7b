//! Selection model behind the shape spinner.
//!
//! A spinner widget only knows positions. [`IndexBinding`] is the
//! forward/inverse pair it is bound through, and [`ShapeSpinner`] holds the
//! items and the current selection.

use crate::error::ShapeError;
use crate::shape::Shape;

/// A value that a position-based widget can select.
///
/// `from_position(to_position(v)) == Ok(v)` for every value, and
/// `from_position` fails for every position the widget does not have.
pub trait IndexBinding: Sized {
    /// Number of selectable values.
    fn position_count() -> usize;

    /// Widget position of `self`.
    fn to_position(&self) -> usize;

    /// Value at widget position `position`.
    fn from_position(position: usize) -> Result<Self, ShapeError>;
}

impl IndexBinding for Shape {
    fn position_count() -> usize {
        Shape::COUNT
    }

    fn to_position(&self) -> usize {
        self.to_index()
    }

    fn from_position(position: usize) -> Result<Self, ShapeError> {
        Shape::try_from(position)
    }
}

/// Items and selection of the shape spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeSpinner {
    selected: Shape,
}

impl ShapeSpinner {
    pub fn new(selected: Shape) -> Self {
        Self { selected }
    }

    pub fn count(&self) -> usize {
        Shape::position_count()
    }

    pub fn item(&self, position: usize) -> Result<Shape, ShapeError> {
        Shape::from_position(position)
    }

    /// Stable row id; rows never move, so it is the position itself.
    pub fn item_id(&self, position: usize) -> Result<u64, ShapeError> {
        self.item(position).map(|shape| shape.to_position() as u64)
    }

    pub fn icon(&self, position: usize) -> Result<&'static str, ShapeError> {
        self.item(position).map(Shape::icon_name)
    }

    pub fn selected(&self) -> Shape {
        self.selected
    }

    pub fn selected_position(&self) -> usize {
        self.selected.to_position()
    }

    pub fn set_selected(&mut self, shape: Shape) {
        self.selected = shape;
    }

    /// Select the shape at `position`.
    ///
    /// On error the previous selection is kept.
    pub fn select_position(&mut self, position: usize) -> Result<Shape, ShapeError> {
        let shape = Shape::from_position(position)?;
        self.selected = shape;
        Ok(shape)
    }
}
