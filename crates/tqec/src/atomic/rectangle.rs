//! Rectangular atomic templates

use std::collections::BTreeSet;

use tracing::debug;

use super::paint_checkerboard;
use crate::array::{Canvas, PlaquetteIndex};
use crate::error::{Result, TemplateError};
use crate::position::Shape2D;
use crate::scale::{check_scale, Dimension};
use crate::template::Template;

/// A rectangle filled with two alternating plaquettes.
///
/// With `width = 2k` and `height = 3k`, the template at `k = 2` instantiated
/// with `[1, 2]` is:
///
/// ```text
/// 1  2  1  2
/// 2  1  2  1
/// 1  2  1  2
/// 2  1  2  1
/// 1  2  1  2
/// 2  1  2  1
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatingRectangleTemplate {
    width: Dimension,
    height: Dimension,
    k: i64,
}

impl AlternatingRectangleTemplate {
    /// Create the template at scale `k`.
    pub fn new(width: Dimension, height: Dimension, k: i64) -> Result<Self> {
        let template = Self { width, height, k };
        template.check_scale(k)?;
        Ok(template)
    }

    /// Current scale.
    pub fn scale(&self) -> i64 {
        self.k
    }
}

impl Template for AlternatingRectangleTemplate {
    fn shape(&self) -> Shape2D {
        // Validated by `new` and `scale_to`.
        self.shape_at(self.k).unwrap_or_default()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        Ok(Shape2D::new(
            self.width.value_at(k)?,
            self.height.value_at(k)?,
        ))
    }

    fn expected_plaquettes_number(&self) -> usize {
        2
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        self.k = k;
        debug!(k, shape = %self.shape(), "scaled alternating rectangle");
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

/// A fixed rectangle of user-provided local roles.
///
/// Each entry of the layout indexes the plaquette indices given to
/// `instantiate`. The entries must form the contiguous set `0..n`, and `n`
/// plaquette indices are expected. The template does not scale.
///
/// The layout `[[2, 1], [1, 1], [0, 3]]` instantiated with `[1, 2, 3, 4]` is:
///
/// ```text
/// 3  2
/// 2  2
/// 1  4
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRectangleTemplate {
    shape: Shape2D,
    roles: Vec<usize>,
    role_count: usize,
}

impl RawRectangleTemplate {
    /// Create the template from rows of local roles.
    pub fn new(indices: Vec<Vec<usize>>) -> Result<Self> {
        let width = indices.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(TemplateError::invalid_configuration(
                "a raw rectangle needs at least one index",
            ));
        }
        if indices.iter().any(|row| row.len() != width) {
            return Err(TemplateError::invalid_configuration(
                "a raw rectangle must have equally sized rows",
            ));
        }

        let distinct: BTreeSet<usize> = indices.iter().flatten().copied().collect();
        let missing: Vec<usize> = (0..distinct.len())
            .filter(|role| !distinct.contains(role))
            .collect();
        if !missing.is_empty() {
            return Err(TemplateError::invalid_configuration(format!(
                "raw rectangle indices must be contiguous from 0, missing {missing:?}"
            )));
        }

        Ok(Self {
            shape: Shape2D::new(width, indices.len()),
            role_count: distinct.len(),
            roles: indices.into_iter().flatten().collect(),
        })
    }

    /// Local role of the cell at column `x`, row `y`.
    pub fn role_at(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.shape.x || y >= self.shape.y {
            return None;
        }
        Some(self.roles[y * self.shape.x + x])
    }
}

impl Template for RawRectangleTemplate {
    fn shape(&self) -> Shape2D {
        self.shape
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        Ok(self.shape)
    }

    fn expected_plaquettes_number(&self) -> usize {
        self.role_count
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        for (y, roles) in self.roles.chunks_exact(self.shape.x).enumerate() {
            // One write per run of equal roles.
            let mut start = 0;
            while start < roles.len() {
                let role = roles[start];
                let end = roles[start..]
                    .iter()
                    .position(|&other| other != role)
                    .map_or(roles.len(), |len| start + len);
                canvas.fill_row(y, start..end, plaquette_indices[role]);
                start = end;
            }
        }
    }
}
