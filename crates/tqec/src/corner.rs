//! Scalable L-shaped corner template

use crate::array::{Canvas, PlaquetteIndex};
use crate::atomic::{AlternatingRectangleTemplate, RawRectangleTemplate};
use crate::composed::ComposedTemplate;
use crate::error::Result;
use crate::position::{CornerPosition, Displacement, Shape2D};
use crate::scale::{check_scale, Dimension, LinearFunction};
use crate::shifted::ScalableOffset;
use crate::template::Template;

/// Side of the square junction joining the two arms. Also the arm thickness.
pub const JUNCTION: usize = 2;

/// Name of the arm running along the left side.
pub const VERTICAL_ARM: &str = "vertical_arm";
/// Name of the arm running along the bottom side.
pub const HORIZONTAL_ARM: &str = "horizontal_arm";
/// Name of the fixed junction in the bottom-left corner.
pub const JUNCTION_REGION: &str = "junction";

/// An L-shaped patch that grows with the scale.
///
/// For a scale function `f`, the corner fills a `d x d` bounding box with
/// `d = f(k)`. It is made of three regions, painted in this order:
///
/// 1. `vertical_arm`: a `2 x (d - 2)` alternating rectangle at the top left,
/// 2. `horizontal_arm`: a `(d - 2) x 2` alternating rectangle at the bottom right,
/// 3. `junction`: a fixed `2 x 2` block of four distinct plaquettes in the
///    bottom-left corner.
///
/// Both arms share their two plaquettes, so the corner always expects six
/// plaquette indices. The upper-right `(d - 2) x (d - 2)` block is empty.
/// With `f(k) = 2k`, `k = 2` and the indices `1..=6`:
///
/// ```text
/// 1  2  .  .
/// 2  1  .  .
/// 3  4  1  2
/// 5  6  2  1
/// ```
///
/// # Example
///
/// ```
/// use tqec::{LinearFunction, ScalableCorner, Shape2D, Template};
///
/// let mut corner = ScalableCorner::new(LinearFunction::with_slope(2).unwrap(), 2).unwrap();
/// assert_eq!(corner.shape(), Shape2D::new(4, 4));
///
/// corner.scale_to(10).unwrap();
/// assert_eq!(corner.shape(), Shape2D::new(20, 20));
/// assert_eq!(corner.expected_plaquettes_number(), 6);
/// ```
#[derive(Debug)]
pub struct ScalableCorner {
    function: LinearFunction,
    regions: ComposedTemplate,
}

impl ScalableCorner {
    /// Build the corner for the scale function `function`, at scale `k`.
    ///
    /// Fails with `InvalidScale` when `k < 1` or when `function(k)` is
    /// smaller than the junction.
    pub fn new(function: LinearFunction, k: i64) -> Result<Self> {
        check_scale(k)?;
        let arm = Dimension::from(function).shifted(-(JUNCTION as i64))?;
        let thickness = Dimension::fixed(JUNCTION);

        let vertical_arm = AlternatingRectangleTemplate::new(thickness, arm, k)?;
        let horizontal_arm = AlternatingRectangleTemplate::new(arm, thickness, k)?;
        let junction = RawRectangleTemplate::new(vec![vec![0, 1], vec![2, 3]])?;

        let mut regions = ComposedTemplate::new(k)?;
        regions
            .add_region(
                VERTICAL_ARM,
                Box::new(vertical_arm),
                ScalableOffset::default(),
                vec![0, 1],
            )?
            .add_region(
                HORIZONTAL_ARM,
                Box::new(horizontal_arm),
                ScalableOffset::default(),
                vec![0, 1],
            )?
            .add_region(
                JUNCTION_REGION,
                Box::new(junction),
                ScalableOffset::default(),
                vec![2, 3, 4, 5],
            )?
            .add_relative_position(
                VERTICAL_ARM,
                JUNCTION_REGION,
                CornerPosition::LowerLeft,
                CornerPosition::UpperLeft,
            )?
            .add_relative_position(
                JUNCTION_REGION,
                HORIZONTAL_ARM,
                CornerPosition::LowerRight,
                CornerPosition::LowerLeft,
            )?;

        Ok(Self { function, regions })
    }

    /// Current scale.
    pub fn scale(&self) -> i64 {
        self.regions.scale()
    }

    /// The scale function driving the corner size.
    pub fn function(&self) -> LinearFunction {
        self.function
    }

    /// Side of the bounding box at the current scale.
    pub fn dimension(&self) -> usize {
        self.shape().x
    }

    /// Length of each arm at the current scale.
    pub fn arm_length(&self) -> usize {
        self.dimension() - JUNCTION
    }

    /// The underlying regions.
    pub fn regions(&self) -> &ComposedTemplate {
        &self.regions
    }
}

impl Template for ScalableCorner {
    fn shape(&self) -> Shape2D {
        self.regions.shape()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        self.regions.shape_at(k)
    }

    fn expected_plaquettes_number(&self) -> usize {
        self.regions.expected_plaquettes_number()
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.regions.scale_to(k)
    }

    fn active_cells(&self) -> usize {
        self.regions.active_cells()
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        self.regions.paint(plaquette_indices, canvas)
    }

    fn default_increments(&self) -> Displacement {
        self.regions.default_increments()
    }
}
