//! # TQEC templates
//!
//! Scalable plaquette templates for topological quantum error correction.
//!
//! A template is a 2D layout of plaquettes whose size follows an integer
//! scale parameter `k`. Templates can be rescaled in place and instantiated
//! into a dense array of plaquette indices, in time linear in the size of
//! that array.
//!
//! ## Architecture
//!
//! - **Scale**: [`LinearFunction`] and [`Dimension`] map `k` to sizes
//! - **Templates**: the [`Template`] trait and its atomic implementations
//! - **Composition**: [`ShiftedTemplate`], [`StackedTemplate`],
//!   [`ComposedTemplate`] and the [`ScalableCorner`] built on top of them
//! - **Instantiation**: [`PlaquetteArray`] and the [`Canvas`] templates paint into
//!
//! ## Example
//!
//! ```
//! use tqec::{LinearFunction, ScalableCorner, Template};
//!
//! let mut corner = ScalableCorner::new(LinearFunction::with_slope(2)?, 2)?;
//! corner.scale_to(4)?;
//!
//! let indices: Vec<u32> = (1..=corner.expected_plaquettes_number() as u32).collect();
//! let array = corner.instantiate(&indices)?;
//! assert_eq!(array.shape(), corner.shape());
//! # Ok::<(), tqec::TemplateError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod atomic;
pub mod composed;
pub mod context;
pub mod corner;
pub mod display;
pub mod error;
pub mod position;
pub mod scale;
pub mod shifted;
pub mod stack;
pub mod template;

// Re-export main types
pub use array::{Canvas, PlaquetteArray, PlaquetteIndex, EMPTY_PLAQUETTE};
pub use atomic::{
    AlternatingCornerSquareTemplate, AlternatingRectangleTemplate, AlternatingSquareTemplate,
    RawRectangleTemplate,
};
pub use composed::ComposedTemplate;
pub use context::{InstantiationContext, DEFAULT_MAX_CELLS};
pub use corner::ScalableCorner;
pub use display::{render_array, render_template};
pub use error::{Result, TemplateError};
pub use position::{CornerPosition, Displacement, Shape2D};
pub use scale::{check_scale, Dimension, LinearFunction, MIN_SCALE};
pub use shifted::{ScalableOffset, ShiftedTemplate};
pub use stack::StackedTemplate;
pub use template::{default_indices, Template, TemplateWithIndices};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
