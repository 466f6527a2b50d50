//! Templates moved away from the origin by a scalable offset

use serde::{Deserialize, Serialize};

use crate::array::{Canvas, PlaquetteIndex};
use crate::error::Result;
use crate::position::{Displacement, Shape2D};
use crate::scale::{check_scale, Dimension};
use crate::template::Template;

/// An offset whose components may grow with the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalableOffset {
    /// Horizontal component
    pub x: Dimension,
    /// Vertical component
    pub y: Dimension,
}

impl ScalableOffset {
    /// Create a new offset.
    pub fn new(x: Dimension, y: Dimension) -> Self {
        Self { x, y }
    }

    /// An offset that never moves.
    pub fn fixed(x: usize, y: usize) -> Self {
        Self::new(Dimension::fixed(x), Dimension::fixed(y))
    }

    /// The offset at scale `k`.
    pub fn value_at(&self, k: i64) -> Result<Displacement> {
        Ok(Displacement::new(self.x.value_at(k)?, self.y.value_at(k)?))
    }
}

impl Default for ScalableOffset {
    fn default() -> Self {
        Self::fixed(0, 0)
    }
}

/// A template drawn at a scalable offset from the origin.
///
/// The cells between the origin and the offset are left empty. Plaquette
/// indices are forwarded unchanged to the shifted template.
#[derive(Debug)]
pub struct ShiftedTemplate {
    shifted: Box<dyn Template>,
    offset: ScalableOffset,
    k: i64,
}

impl ShiftedTemplate {
    /// Shift `template` by `offset`, at scale `k`.
    pub fn new(template: Box<dyn Template>, offset: ScalableOffset, k: i64) -> Result<Self> {
        let mut shifted = Self {
            shifted: template,
            offset,
            k,
        };
        shifted.scale_to(k)?;
        Ok(shifted)
    }

    /// Current offset.
    pub fn offset(&self) -> Displacement {
        self.offset.value_at(self.k).unwrap_or_default()
    }

    /// The shifted template.
    pub fn inner(&self) -> &dyn Template {
        self.shifted.as_ref()
    }
}

impl Template for ShiftedTemplate {
    fn shape(&self) -> Shape2D {
        self.shape_at(self.k).unwrap_or_default()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        let offset = self.offset.value_at(k)?;
        let inner = self.shifted.shape_at(k)?;
        // Saturated sides are reported by the instantiation budget.
        Ok(Shape2D::new(
            offset.x.saturating_add(inner.x),
            offset.y.saturating_add(inner.y),
        ))
    }

    fn expected_plaquettes_number(&self) -> usize {
        self.shifted.expected_plaquettes_number()
    }

    fn active_cells(&self) -> usize {
        self.shifted.active_cells()
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        self.shifted.scale_to(k)?;
        self.k = k;
        Ok(())
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        let mut window = canvas.window(self.offset(), self.shifted.shape());
        self.shifted.paint(plaquette_indices, &mut window);
    }

    fn default_increments(&self) -> Displacement {
        self.shifted.default_increments()
    }
}
