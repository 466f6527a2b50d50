//! Instantiated plaquette arrays and the canvas templates paint into
//!
//! A [`PlaquetteArray`] is the dense, row-major result of instantiating a
//! template: each cell holds the plaquette index occupying that position, or
//! [`EMPTY_PLAQUETTE`] when no plaquette is there.
//!
//! Templates never build intermediate arrays. They paint through a
//! [`Canvas`], a mutable window into the final array, so that composed
//! templates write each cell of the output directly and instantiation stays
//! linear in the number of cells.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TemplateError};
use crate::position::{Displacement, Shape2D};

/// Index identifying a plaquette, supplied by the caller at instantiation.
pub type PlaquetteIndex = u32;

/// Sentinel stored in cells that no plaquette occupies.
pub const EMPTY_PLAQUETTE: PlaquetteIndex = 0;

/// A dense 2D grid of plaquette indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlaquetteArray")]
pub struct PlaquetteArray {
    shape: Shape2D,
    cells: Vec<PlaquetteIndex>,
}

#[derive(Deserialize)]
struct RawPlaquetteArray {
    shape: Shape2D,
    cells: Vec<PlaquetteIndex>,
}

impl TryFrom<RawPlaquetteArray> for PlaquetteArray {
    type Error = TemplateError;

    fn try_from(raw: RawPlaquetteArray) -> Result<Self> {
        if raw.shape.area() != Some(raw.cells.len()) {
            return Err(TemplateError::invalid_configuration(format!(
                "array of shape {} cannot hold {} cells",
                raw.shape,
                raw.cells.len()
            )));
        }
        Ok(Self {
            shape: raw.shape,
            cells: raw.cells,
        })
    }
}

impl PlaquetteArray {
    /// Allocate an array filled with [`EMPTY_PLAQUETTE`].
    ///
    /// The caller is responsible for checking that the area fits in memory;
    /// see [`InstantiationContext`](crate::InstantiationContext).
    pub fn empty(shape: Shape2D) -> Self {
        Self {
            shape,
            cells: vec![EMPTY_PLAQUETTE; shape.x * shape.y],
        }
    }

    /// Build an array from equally sized rows.
    pub fn from_rows(rows: Vec<Vec<PlaquetteIndex>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(TemplateError::invalid_configuration(
                "rows of a plaquette array must all have the same length",
            ));
        }
        let shape = Shape2D::new(width, rows.len());
        Ok(Self {
            shape,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Shape of the array.
    pub fn shape(&self) -> Shape2D {
        self.shape
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.shape.x
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.shape.y
    }

    /// Cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<PlaquetteIndex> {
        if x >= self.shape.x || y >= self.shape.y {
            return None;
        }
        Some(self.cells[y * self.shape.x + x])
    }

    /// Row `y` of the array.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[PlaquetteIndex] {
        let start = y * self.shape.x;
        &self.cells[start..start + self.shape.x]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PlaquetteIndex]> + '_ {
        (0..self.shape.y).map(move |y| self.row(y))
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[PlaquetteIndex] {
        &self.cells
    }

    /// Number of cells holding a plaquette.
    pub fn count_non_empty(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != EMPTY_PLAQUETTE)
            .count()
    }

    /// Convert into nested rows.
    pub fn into_rows(self) -> Vec<Vec<PlaquetteIndex>> {
        if self.shape.x == 0 {
            return vec![Vec::new(); self.shape.y];
        }
        self.cells
            .chunks_exact(self.shape.x)
            .map(<[PlaquetteIndex]>::to_vec)
            .collect()
    }

    /// A canvas covering the whole array.
    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas {
            stride: self.shape.x,
            origin: Displacement::default(),
            extent: self.shape,
            cells: &mut self.cells,
        }
    }
}

/// A rectangular, mutable window into a [`PlaquetteArray`].
///
/// Coordinates passed to a canvas are local to the window. Windows are
/// clipped to their parent, so painting through a canvas can never write
/// outside of it.
#[derive(Debug)]
pub struct Canvas<'a> {
    cells: &'a mut [PlaquetteIndex],
    stride: usize,
    origin: Displacement,
    extent: Shape2D,
}

impl<'a> Canvas<'a> {
    /// Size of the window.
    pub fn extent(&self) -> Shape2D {
        self.extent
    }

    /// A sub-window starting at `offset`, clipped to this window.
    pub fn window(&mut self, offset: Displacement, extent: Shape2D) -> Canvas<'_> {
        let x = offset.x.min(self.extent.x);
        let y = offset.y.min(self.extent.y);
        Canvas {
            stride: self.stride,
            origin: Displacement::new(self.origin.x + x, self.origin.y + y),
            extent: Shape2D::new(
                extent.x.min(self.extent.x - x),
                extent.y.min(self.extent.y - y),
            ),
            cells: &mut *self.cells,
        }
    }

    /// Row `y` of the window.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the window.
    pub fn row_mut(&mut self, y: usize) -> &mut [PlaquetteIndex] {
        assert!(
            y < self.extent.y,
            "row {y} outside canvas of height {}",
            self.extent.y
        );
        let start = (self.origin.y + y) * self.stride + self.origin.x;
        &mut self.cells[start..start + self.extent.x]
    }

    /// Write `value` in the columns `columns` of row `y`.
    ///
    /// The run is clipped to the window, and rows outside it are ignored.
    pub fn fill_row(&mut self, y: usize, columns: Range<usize>, value: PlaquetteIndex) {
        if y >= self.extent.y {
            return;
        }
        let end = columns.end.min(self.extent.x);
        let start = columns.start.min(end);
        self.row_mut(y)[start..end].fill(value);
    }

    /// Write `value` at column `x`, row `y`. Out of window writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: PlaquetteIndex) {
        if x < self.extent.x && y < self.extent.y {
            self.row_mut(y)[x] = value;
        }
    }
}
