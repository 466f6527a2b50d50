//! Templates composed of named, offset regions
//!
//! A [`ComposedTemplate`] places several templates ("regions") in one
//! bounding box. Each region keeps its own local plaquette roles and maps
//! them into a single global role space, so that regions may share roles.
//!
//! # Overlaps
//!
//! Regions are painted in declaration order. When two regions cover the same
//! cell, the region declared **later** wins. Cells covered by no region stay
//! [`EMPTY_PLAQUETTE`](crate::EMPTY_PLAQUETTE).
//!
//! # Placement
//!
//! A region is placed either at a [`ScalableOffset`] from the origin, or
//! relative to another region by joining one of its corners to a corner of
//! that anchor. Relative placements form a forest rooted at offset-placed
//! regions, and are resolved into offsets at every scale:
//!
//! ```text
//! vertical_arm (0, 0)
//!   └─ junction: upper left on vertical_arm's lower left
//!        └─ horizontal_arm: lower left on junction's lower right
//! ```

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::array::{Canvas, PlaquetteIndex};
use crate::error::{Result, TemplateError};
use crate::position::{CornerPosition, Displacement, Shape2D};
use crate::scale::check_scale;
use crate::shifted::ScalableOffset;
use crate::template::Template;

/// Where a region sits in the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// At a scalable offset from the origin
    Offset(ScalableOffset),
    /// With its `corner` on the `anchor_corner` of the region at index `anchor`
    Relative {
        anchor: usize,
        anchor_corner: CornerPosition,
        corner: CornerPosition,
    },
}

/// One region of a [`ComposedTemplate`].
#[derive(Debug)]
struct Region {
    template: Box<dyn Template>,
    placement: Placement,
    /// Global role of each local role of `template`
    roles: Vec<usize>,
}

/// Region shapes and offsets at one scale, in declaration order.
#[derive(Debug)]
struct Layout {
    shapes: Vec<Shape2D>,
    offsets: Vec<Displacement>,
}

impl Layout {
    fn bounding_box(&self) -> Shape2D {
        // Saturated sides are reported by the instantiation budget.
        self.shapes
            .iter()
            .zip(&self.offsets)
            .fold(Shape2D::default(), |shape, (local, offset)| {
                shape.max(Shape2D::new(
                    offset.x.saturating_add(local.x),
                    offset.y.saturating_add(local.y),
                ))
            })
    }
}

/// Offset of a region of `shape` whose `corner` touches `anchor_corner` of
/// the anchor region. `None` when the region would start at a negative
/// coordinate.
fn relative_offset(
    anchor_offset: Displacement,
    anchor_shape: Shape2D,
    anchor_corner: CornerPosition,
    shape: Shape2D,
    corner: CornerPosition,
) -> Option<Displacement> {
    let point = anchor_corner.point(anchor_shape);
    let delta = corner.point(shape);
    Some(Displacement::new(
        anchor_offset.x.saturating_add(point.x).checked_sub(delta.x)?,
        anchor_offset.y.saturating_add(point.y).checked_sub(delta.y)?,
    ))
}

/// A template made of named regions placed at scalable offsets.
///
/// # Example
///
/// ```
/// use tqec::{ComposedTemplate, CornerPosition, RawRectangleTemplate, ScalableOffset, Template};
///
/// let mut composed = ComposedTemplate::new(1).unwrap();
/// let cell = || Box::new(RawRectangleTemplate::new(vec![vec![0]]).unwrap());
/// composed
///     .add_region("left", cell(), ScalableOffset::fixed(0, 0), vec![0])
///     .unwrap();
/// composed
///     .add_region("right", cell(), ScalableOffset::fixed(2, 0), vec![0])
///     .unwrap();
///
/// assert_eq!(composed.expected_plaquettes_number(), 1);
/// let array = composed.instantiate(&[7]).unwrap();
/// assert_eq!(array.row(0), &[7, 0, 7]);
///
/// // Glue "right" to the right side of "left".
/// composed
///     .add_relative_position("left", "right", CornerPosition::UpperRight, CornerPosition::UpperLeft)
///     .unwrap();
/// assert_eq!(composed.instantiate(&[7]).unwrap().row(0), &[7, 7]);
/// ```
#[derive(Debug)]
pub struct ComposedTemplate {
    regions: IndexMap<String, Region>,
    role_count: usize,
    k: i64,
}

impl ComposedTemplate {
    /// Create an empty composition at scale `k`.
    pub fn new(k: i64) -> Result<Self> {
        check_scale(k)?;
        Ok(Self {
            regions: IndexMap::new(),
            role_count: 0,
            k,
        })
    }

    /// Add a region on top of the already declared ones.
    ///
    /// `roles[i]` is the global role given to local role `i` of `template`.
    /// Global roles are numbered in declaration order: after each addition
    /// the roles in use must be exactly `0..n`. The region is rescaled to the
    /// composition's current scale.
    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        mut template: Box<dyn Template>,
        offset: ScalableOffset,
        roles: Vec<usize>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.regions.contains_key(&name) {
            return Err(TemplateError::invalid_configuration(format!(
                "region '{name}' is already declared"
            )));
        }
        if roles.len() != template.expected_plaquettes_number() {
            return Err(TemplateError::invalid_configuration(format!(
                "region '{name}' has {} local roles but {} role mappings were given",
                template.expected_plaquettes_number(),
                roles.len()
            )));
        }
        let role_count = self.contiguous_role_count(&name, &roles)?;

        offset.value_at(self.k)?;
        template.scale_to(self.k)?;

        self.regions.insert(
            name,
            Region {
                template,
                placement: Placement::Offset(offset),
                roles,
            },
        );
        self.role_count = role_count;
        Ok(self)
    }

    /// Place region `placed` so that its `placed_corner` touches the
    /// `anchor_corner` of region `anchor`, at every scale.
    ///
    /// This replaces the previous placement of `placed`. Fails with
    /// `InvalidConfiguration` on unknown names, when the anchors would form a
    /// cycle, or when `placed` would start at a negative coordinate at the
    /// current scale. On error nothing changes.
    pub fn add_relative_position(
        &mut self,
        anchor: &str,
        placed: &str,
        anchor_corner: CornerPosition,
        placed_corner: CornerPosition,
    ) -> Result<&mut Self> {
        let anchor_index = self.region_index(anchor)?;
        let placed_index = self.region_index(placed)?;

        let mut current = anchor_index;
        loop {
            if current == placed_index {
                return Err(TemplateError::invalid_configuration(format!(
                    "placing '{placed}' relative to '{anchor}' creates a cycle"
                )));
            }
            match self.regions[current].placement {
                Placement::Relative { anchor, .. } => current = anchor,
                Placement::Offset(_) => break,
            }
        }

        let placement = Placement::Relative {
            anchor: anchor_index,
            anchor_corner,
            corner: placed_corner,
        };
        let previous = std::mem::replace(&mut self.regions[placed_index].placement, placement);
        if self.layout_at(self.k).is_err() {
            self.regions[placed_index].placement = previous;
            return Err(TemplateError::invalid_configuration(format!(
                "region '{placed}' would start at a negative coordinate when its \
                 {placed_corner:?} corner touches the {anchor_corner:?} corner of '{anchor}'"
            )));
        }
        debug!(anchor, placed, ?anchor_corner, ?placed_corner, "placed region relatively");
        Ok(self)
    }

    fn region_index(&self, name: &str) -> Result<usize> {
        self.regions.get_index_of(name).ok_or_else(|| {
            TemplateError::invalid_configuration(format!("unknown region '{name}'"))
        })
    }

    /// Number of global roles once `roles` are added, if they stay contiguous.
    fn contiguous_role_count(&self, name: &str, roles: &[usize]) -> Result<usize> {
        // At most one new role per mapping: anything beyond leaves a gap.
        let limit = self.role_count.saturating_add(roles.len());
        if let Some(&role) = roles.iter().find(|&&role| role >= limit) {
            return Err(TemplateError::invalid_configuration(format!(
                "region '{name}' maps to global role {role}, roles must stay below {limit}"
            )));
        }

        let mut used = vec![true; self.role_count];
        for &role in roles {
            if role >= used.len() {
                used.resize(role + 1, false);
            }
            used[role] = true;
        }
        match used.iter().position(|&is_used| !is_used) {
            Some(missing) => Err(TemplateError::invalid_configuration(format!(
                "region '{name}' leaves global role {missing} unused"
            ))),
            None => Ok(used.len()),
        }
    }

    /// Resolve every region's shape and offset at scale `k`.
    ///
    /// Each region is resolved once, so this is linear in the number of
    /// regions.
    fn layout_at(&self, k: i64) -> Result<Layout> {
        let shapes = self
            .regions
            .values()
            .map(|region| region.template.shape_at(k))
            .collect::<Result<Vec<_>>>()?;

        let mut offsets: Vec<Option<Displacement>> = vec![None; self.regions.len()];
        let mut pending = Vec::new();
        for index in 0..self.regions.len() {
            let mut current = index;
            let mut base = loop {
                if let Some(offset) = offsets[current] {
                    break offset;
                }
                match self.regions[current].placement {
                    Placement::Offset(offset) => {
                        let offset = offset.value_at(k)?;
                        offsets[current] = Some(offset);
                        break offset;
                    }
                    Placement::Relative {
                        anchor,
                        anchor_corner,
                        corner,
                    } => {
                        pending.push((current, anchor, anchor_corner, corner));
                        current = anchor;
                    }
                }
            };

            while let Some((placed, anchor, anchor_corner, corner)) = pending.pop() {
                let offset =
                    relative_offset(base, shapes[anchor], anchor_corner, shapes[placed], corner)
                        .ok_or_else(|| {
                            let name = self
                                .regions
                                .get_index(placed)
                                .map_or("", |(name, _)| name.as_str());
                            TemplateError::invalid_scale(
                                k,
                                format!("region '{name}' would start at a negative coordinate"),
                            )
                        })?;
                offsets[placed] = Some(offset);
                base = offset;
            }
        }

        Ok(Layout {
            shapes,
            offsets: offsets.into_iter().map(Option::unwrap_or_default).collect(),
        })
    }

    /// Current scale.
    pub fn scale(&self) -> i64 {
        self.k
    }

    /// Region names, in declaration (painting) order.
    pub fn region_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.keys().map(String::as_str)
    }

    /// Shape of the named region at the current scale.
    pub fn region_shape(&self, name: &str) -> Option<Shape2D> {
        self.regions.get(name).map(|region| region.template.shape())
    }

    /// Offset of the named region at the current scale.
    pub fn region_offset(&self, name: &str) -> Option<Displacement> {
        let index = self.regions.get_index_of(name)?;
        let layout = self.layout_at(self.k).ok()?;
        layout.offsets.get(index).copied()
    }

    /// Global roles of the named region.
    pub fn region_roles(&self, name: &str) -> Option<&[usize]> {
        self.regions.get(name).map(|region| region.roles.as_slice())
    }
}

impl Template for ComposedTemplate {
    fn shape(&self) -> Shape2D {
        // Validated by `add_region`, `add_relative_position` and `scale_to`.
        self.shape_at(self.k).unwrap_or_default()
    }

    fn shape_at(&self, k: i64) -> Result<Shape2D> {
        check_scale(k)?;
        Ok(self.layout_at(k)?.bounding_box())
    }

    fn expected_plaquettes_number(&self) -> usize {
        self.role_count
    }

    fn scale_to(&mut self, k: i64) -> Result<()> {
        self.check_scale(k)?;
        for region in self.regions.values_mut() {
            region.template.scale_to(k)?;
        }
        self.k = k;
        debug!(k, shape = %self.shape(), regions = self.regions.len(), "scaled composed template");
        Ok(())
    }

    fn active_cells(&self) -> usize {
        self.regions
            .values()
            .map(|region| region.template.active_cells())
            .fold(0, usize::saturating_add)
    }

    fn paint(&self, plaquette_indices: &[PlaquetteIndex], canvas: &mut Canvas<'_>) {
        let Ok(layout) = self.layout_at(self.k) else {
            return;
        };
        let mut local = Vec::new();
        for (index, (name, region)) in self.regions.iter().enumerate() {
            local.clear();
            local.extend(region.roles.iter().map(|&role| plaquette_indices[role]));

            let (offset, shape) = (layout.offsets[index], layout.shapes[index]);
            trace!(region = %name, x = offset.x, y = offset.y, shape = %shape, "painting region");
            let mut window = canvas.window(offset, shape);
            region.template.paint(&local, &mut window);
        }
    }
}
