//! Templates stacked on top of each other

use crate::array::{Canvas, PlaquetteIndex};
use crate::error::Result;
use crate::position::Shape2D;
use crate::scale::check_scale;
use crate::template::Template;

/// Templates superposed on top of each other, all anchored at the origin.
///
/// Each template hides the ones below it wherever it places a plaquette.
/// The plaquette indices given to `instantiate` are split between the
/// stacked templates from bottom to top, so a hidden template still
/// consumes its indices.
///
/// Stacking the 2x2 alternating square on itself needs four indices, and
/// `[1, 2, 3, 4]` yields:
///
/// ```text
/// 3  4
/// 4  3
/// ```
#[derive(Debug, Default)]
pub struct StackedTemplate {
    stack: Vec<Box<dyn Template>>,
}

impl StackedTemplate {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new template on top of the stack.
    pub fn push_template_on_top(&mut self, template: Box<dyn Template>) {
        self.stack.push(template);
    }

    /// Remove the top-most template.
    pub fn pop_template_from_top(&mut self) -> Option<Box<dyn Template>> {
        self.stack.pop()
    }

    /// Number of stacked templates.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// True when nothing is stacked.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Template for StackedTemplate {
    fn shape(&self) -> Shape2D {
        self.stack
            .iter()
            .fold(Shape2D::default(), |shape, template| shape.max(template.shape()))
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        self.stack.iter().try_fold(Shape2D::default(), |shape, template| {
            Ok(shape.max(template.shape_at(k)?))
        })
    }

    fn expected_plaquettes_number(&self) -> usize {
        self.stack
            .iter()
            .map(|template| template.expected_plaquettes_number())
            .sum()
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        self.stack
            .iter_mut()
            .try_for_each(|template| template.scale_to(k))
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        let mut first_unused = 0;
        for template in &self.stack {
            let count = template.expected_plaquettes_number();
            let indices = &plaquette_indices[first_unused..first_unused + count];
            first_unused += count;
            let mut window = canvas.window(Default::default(), template.shape());
            template.paint(indices, &mut window);
        }
    }
}
