//! Plain-text rendering of instantiated templates

use crate::array::{PlaquetteArray, EMPTY_PLAQUETTE};
use crate::error::Result;
use crate::template::{default_indices, Template};

/// Marker printed for empty cells.
pub const EMPTY_MARKER: &str = ".";

/// Render an array one row per line, columns right-aligned and separated by
/// two spaces. Empty cells are printed as [`EMPTY_MARKER`].
pub fn render_array(array: &PlaquetteArray) -> String {
    let largest = array.as_slice().iter().copied().max().unwrap_or(EMPTY_PLAQUETTE);
    let width = largest.to_string().len().max(EMPTY_MARKER.len());

    let mut out = String::new();
    for row in array.rows() {
        for (x, &cell) in row.iter().enumerate() {
            if x > 0 {
                out.push_str("  ");
            }
            let text = if cell == EMPTY_PLAQUETTE {
                format!("{EMPTY_MARKER:>width$}")
            } else {
                format!("{cell:>width$}")
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

/// Instantiate `template` with the indices `1..=n` and render it.
pub fn render_template(template: &dyn Template) -> Result<String> {
    let array = template.instantiate(&default_indices(template))?;
    Ok(render_array(&array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corner::ScalableCorner;
    use crate::scale::LinearFunction;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_corner() {
        let corner = ScalableCorner::new(LinearFunction::default(), 2).unwrap();
        assert_eq!(
            render_template(&corner).unwrap(),
            "1  2  .  .\n2  1  .  .\n3  4  1  2\n5  6  2  1\n"
        );
    }

    #[test]
    fn test_render_aligns_columns() {
        let array = PlaquetteArray::from_rows(vec![vec![12, 0], vec![3, 4]]).unwrap();
        assert_eq!(render_array(&array), "12   .\n 3   4\n");
    }

    #[test]
    fn test_render_empty_array() {
        let array = PlaquetteArray::from_rows(vec![]).unwrap();
        assert_eq!(render_array(&array), "");
    }
}
