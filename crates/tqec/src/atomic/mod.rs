//! Atomic templates: leaf layouts that do not contain other templates

mod corner_square;
mod rectangle;
mod square;

pub use corner_square::AlternatingCornerSquareTemplate;
pub use rectangle::{AlternatingRectangleTemplate, RawRectangleTemplate};
pub use square::AlternatingSquareTemplate;

use crate::array::{Canvas, PlaquetteIndex};

/// Paint a `width` x `height` checkerboard of `even` and `odd` plaquettes.
///
/// Cell `(x, y)` receives `even` when `x + y` is even.
pub(crate) fn paint_checkerboard(
    canvas: &mut Canvas<'_>,
    width: usize,
    height: usize,
    even: PlaquetteIndex,
    odd: PlaquetteIndex,
) {
    let extent = canvas.extent();
    let (width, height) = (width.min(extent.x), height.min(extent.y));
    for y in 0..height {
        let row = &mut canvas.row_mut(y)[..width];
        let (first, second) = if y % 2 == 0 { (even, odd) } else { (odd, even) };
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = if x % 2 == 0 { first } else { second };
        }
    }
}
