//! Square alternating template

use super::paint_checkerboard;
use crate::array::{Canvas, PlaquetteIndex};
use crate::error::Result;
use crate::position::Shape2D;
use crate::scale::{check_scale, Dimension};
use crate::template::Template;

/// A square filled with two alternating plaquettes.
///
/// Both sides follow the same [`Dimension`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatingSquareTemplate {
    dimension: Dimension,
    k: i64,
}

impl AlternatingSquareTemplate {
    /// Create the template at scale `k`.
    pub fn new(dimension: Dimension, k: i64) -> Result<Self> {
        let template = Self { dimension, k };
        template.check_scale(k)?;
        Ok(template)
    }

    /// Current scale.
    pub fn scale(&self) -> i64 {
        self.k
    }
}

impl Template for AlternatingSquareTemplate {
    fn shape(&self) -> Shape2D {
        self.shape_at(self.k).unwrap_or_default()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        let side = self.dimension.value_at(k)?;
        Ok(Shape2D::new(side, side))
    }

    fn expected_plaquettes_number(&self) -> usize {
        2
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        self.k = k;
        Ok(())
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        let shape = self.shape();
        paint_checkerboard(
            canvas,
            shape.x,
            shape.y,
            plaquette_indices[0],
            plaquette_indices[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_follows_dimension() {
        let mut template = AlternatingSquareTemplate::new(Dimension::linear(2, 0).unwrap(), 1).unwrap();
        assert_eq!(template.shape(), Shape2D::new(2, 2));
        template.scale_to(3).unwrap();
        assert_eq!(template.shape(), Shape2D::new(6, 6));
        assert_eq!(template.scale(), 3);
    }

    #[test]
    fn test_square_instantiate() {
        let template = AlternatingSquareTemplate::new(Dimension::fixed(3), 1).unwrap();
        let array = template.instantiate(&[5, 6]).unwrap();
        assert_eq!(
            array.into_rows(),
            vec![vec![5, 6, 5], vec![6, 5, 6], vec![5, 6, 5]]
        );
    }
}
