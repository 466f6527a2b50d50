//! Square alternating template with a distinguished corner

use crate::array::{Canvas, PlaquetteIndex};
use crate::error::Result;
use crate::position::{CornerPosition, Shape2D};
use crate::scale::{check_scale, Dimension};
use crate::template::Template;

/// A square split along its diagonal, with one plaquette in a corner.
///
/// Seen from the chosen corner, the corner cell gets role 0, the cells on
/// the far side of the diagonal alternate between roles 1 and 2, and the
/// cells on the diagonal and the near side alternate between roles 3 and 4.
/// Five plaquettes are expected.
///
/// A side of 4 with the corner in the upper left, instantiated with
/// `[1, 2, 3, 4, 5]`:
///
/// ```text
/// 1  5  4  5
/// 3  4  5  4
/// 2  3  4  5
/// 3  2  3  4
/// ```
///
/// Other corners mirror this layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatingCornerSquareTemplate {
    dimension: Dimension,
    corner: CornerPosition,
    k: i64,
}

impl AlternatingCornerSquareTemplate {
    /// Create the template at scale `k`.
    pub fn new(dimension: Dimension, corner: CornerPosition, k: i64) -> Result<Self> {
        let template = Self {
            dimension,
            corner,
            k,
        };
        template.check_scale(k)?;
        Ok(template)
    }

    /// Current scale.
    pub fn scale(&self) -> i64 {
        self.k
    }

    /// The distinguished corner.
    pub fn corner(&self) -> CornerPosition {
        self.corner
    }

    /// Local role of the cell `(x, y)` of a square of side `side`.
    fn role_at(&self, side: usize, x: usize, y: usize) -> usize {
        let x = if self.corner.is_right() { side - 1 - x } else { x };
        let y = if self.corner.is_lower() { side - 1 - y } else { y };
        let even = (x + y) % 2 == 0;
        match (x, y) {
            (0, 0) => 0,
            _ if y > x => {
                if even {
                    1
                } else {
                    2
                }
            }
            _ => {
                if even {
                    3
                } else {
                    4
                }
            }
        }
    }
}

impl Template for AlternatingCornerSquareTemplate {
    fn shape(&self) -> Shape2D {
        self.shape_at(self.k).unwrap_or_default()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        let side = self.dimension.value_at(k)?;
        Ok(Shape2D::new(side, side))
    }

    fn expected_plaquettes_number(&self) -> usize {
        5
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        self.k = k;
        Ok(())
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        let side = self.shape().x;
        let extent = canvas.extent();
        for y in 0..side.min(extent.y) {
            let row = canvas.row_mut(y);
            for (x, cell) in row.iter_mut().take(side).enumerate() {
                *cell = plaquette_indices[self.role_at(side, x, y)];
            }
        }
    }
}
