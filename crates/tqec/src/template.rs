//! The template contract
//!
//! A template is a parametrized 2D layout of plaquettes. It knows its shape
//! as a function of a scale parameter `k`, can be rescaled in place, and can
//! be instantiated into a [`PlaquetteArray`] given one plaquette index per
//! role it declares.
//!
//! # Architecture
//!
//! ```text
//! indices ─┐
//!          ├─ instantiate ─→ [check arity / budget] ─→ PlaquetteArray::empty ─→ paint ─→ array
//! scale k ─┘
//! ```
//!
//! Implementors provide geometry (`shape`, `check_scale`, `scale_to`) and a
//! `paint` method; validation and allocation live in the provided
//! `instantiate_with` method so every template enforces them identically.

use std::fmt;

use tracing::debug;

use crate::array::{Canvas, PlaquetteArray, PlaquetteIndex, EMPTY_PLAQUETTE};
use crate::context::InstantiationContext;
use crate::error::{Result, TemplateError};
use crate::position::{Displacement, Shape2D};

/// Trait implemented by every template topology.
pub trait Template: fmt::Debug {
    /// Current shape of the template.
    ///
    /// Derived from the current scale on every call, in time independent of
    /// the template area.
    fn shape(&self) -> Shape2D;

    /// Shape the template would have at scale `k`.
    ///
    /// Fails with `InvalidScale` when the template cannot be scaled to `k`.
    fn shape_at(&self, k: i64) -> Result<Shape2D>;

    /// Number of plaquette indices `instantiate` expects.
    ///
    /// Depends only on the template topology, never on its scale.
    fn expected_plaquettes_number(&self) -> usize;

    /// Check that the template could be scaled to `k`, without modifying it.
    fn check_scale(&self, k: i64) -> Result<()> {
        self.shape_at(k).map(|_| ())
    }

    /// Scale the template to `k`, in place.
    ///
    /// Either the whole template is rescaled or, on error, nothing changes.
    fn scale_to(&mut self, k: i64) -> Result<()>;

    /// Write the template cells into `canvas`.
    ///
    /// `plaquette_indices` must hold exactly `expected_plaquettes_number()`
    /// entries. Cells the template does not cover are left untouched.
    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>);

    /// Number of cells holding a plaquette once instantiated.
    ///
    /// The default counts the whole shape. Templates made of parts sum
    /// them, which is exact as long as the parts do not overlap.
    fn active_cells(&self) -> usize {
        self.shape().area().unwrap_or(usize::MAX)
    }

    /// Default increments between two plaquettes, in qubit coordinates.
    fn default_increments(&self) -> Displacement {
        Displacement::new(2, 2)
    }

    /// Instantiate the template with the default [`InstantiationContext`].
    fn instantiate(&self, plaquette_indices: &[PlaquetteIndex]) -> Result<PlaquetteArray> {
        self.instantiate_with(plaquette_indices, &InstantiationContext::default())
    }

    /// Instantiate the template into a freshly allocated array.
    ///
    /// # Errors
    ///
    /// - `ArityMismatch` if `plaquette_indices` does not hold exactly
    ///   `expected_plaquettes_number()` entries
    /// - `ReservedPlaquetteIndex` if an entry is the empty sentinel
    /// - `GeometryOverflow` if the array would exceed `ctx.max_cells`
    fn instantiate_with(
        &self,
        plaquette_indices: &[PlaquetteIndex],
        ctx: &InstantiationContext,
    ) -> Result<PlaquetteArray> {
        check_plaquette_indices(plaquette_indices, self.expected_plaquettes_number())?;
        let shape = self.shape();
        let overflow = TemplateError::GeometryOverflow {
            width: shape.x,
            height: shape.y,
            max_cells: ctx.max_cells,
        };
        let cells = shape.area().ok_or_else(|| overflow.clone())?;
        if !ctx.allows(cells) {
            return Err(overflow);
        }

        debug!(shape = %shape, cells, "instantiating template");
        let mut array = PlaquetteArray::empty(shape);
        self.paint(plaquette_indices, &mut array.canvas());
        Ok(array)
    }
}

/// Check the plaquette indices supplied to an instantiation.
pub fn check_plaquette_indices(plaquette_indices: &[PlaquetteIndex], expected: usize) -> Result<()> {
    if plaquette_indices.len() != expected {
        return Err(TemplateError::ArityMismatch {
            expected,
            got: plaquette_indices.len(),
        });
    }
    if let Some(position) = plaquette_indices
        .iter()
        .position(|&index| index == EMPTY_PLAQUETTE)
    {
        return Err(TemplateError::ReservedPlaquetteIndex { position });
    }
    Ok(())
}

/// The plaquette indices `1..=n` for a template expecting `n` plaquettes.
pub fn default_indices(template: &dyn Template) -> Vec<PlaquetteIndex> {
    (1..).take(template.expected_plaquettes_number()).collect()
}

/// A template paired with the plaquette indices it should be instantiated with.
#[derive(Debug)]
pub struct TemplateWithIndices {
    template: Box<dyn Template>,
    indices: Vec<PlaquetteIndex>,
}

impl TemplateWithIndices {
    /// Pair `template` with `indices`, checking them against the template.
    pub fn new(template: Box<dyn Template>, indices: Vec<PlaquetteIndex>) -> Result<Self> {
        check_plaquette_indices(&indices, template.expected_plaquettes_number())?;
        Ok(Self { template, indices })
    }

    /// The wrapped template.
    pub fn template(&self) -> &dyn Template {
        self.template.as_ref()
    }

    /// The plaquette indices.
    pub fn indices(&self) -> &[PlaquetteIndex] {
        &self.indices
    }

    /// Rescale the wrapped template.
    pub fn scale_to(&mut self, k: i64) -> Result<()> {
        self.template.scale_to(k)
    }

    /// Instantiate the wrapped template with its indices.
    pub fn instantiate(&self) -> Result<PlaquetteArray> {
        self.template.instantiate(&self.indices)
    }
}
