//! Geometry value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width (`x`) and height (`y`) of a template, in plaquettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Shape2D {
    /// Number of columns
    pub x: usize,
    /// Number of rows
    pub y: usize,
}

impl Shape2D {
    /// Create a new shape.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Number of cells, or `None` if it does not fit in `usize`.
    pub fn area(&self) -> Option<usize> {
        self.x.checked_mul(self.y)
    }

    /// `(rows, cols)` ordering used by the instantiated arrays.
    pub fn to_array_shape(&self) -> (usize, usize) {
        (self.y, self.x)
    }

    /// Component-wise maximum of two shapes.
    pub fn max(self, other: Shape2D) -> Shape2D {
        Shape2D::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// True when `self` is at least as large as `other` along both axes.
    pub fn contains(&self, other: &Shape2D) -> bool {
        self.x >= other.x && self.y >= other.y
    }
}

impl fmt::Display for Shape2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// A displacement on the plaquette grid.
///
/// Used both for region offsets and for the default increments between two
/// neighbouring plaquettes in qubit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Displacement {
    /// Horizontal component
    pub x: usize,
    /// Vertical component
    pub y: usize,
}

impl Displacement {
    /// Create a new displacement.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One of the four corners of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPosition {
    /// Top left, the rectangle origin
    UpperLeft,
    /// Top right
    UpperRight,
    /// Bottom left
    LowerLeft,
    /// Bottom right
    LowerRight,
}

impl CornerPosition {
    /// Grid point of this corner for a rectangle of `shape` placed at the origin.
    pub fn point(self, shape: Shape2D) -> Displacement {
        match self {
            CornerPosition::UpperLeft => Displacement::new(0, 0),
            CornerPosition::UpperRight => Displacement::new(shape.x, 0),
            CornerPosition::LowerLeft => Displacement::new(0, shape.y),
            CornerPosition::LowerRight => Displacement::new(shape.x, shape.y),
        }
    }

    /// True for the two corners on the right side.
    pub fn is_right(self) -> bool {
        matches!(self, CornerPosition::UpperRight | CornerPosition::LowerRight)
    }

    /// True for the two corners on the bottom side.
    pub fn is_lower(self) -> bool {
        matches!(self, CornerPosition::LowerLeft | CornerPosition::LowerRight)
    }
}
