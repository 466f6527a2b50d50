//! Scalable corner tests

use pretty_assertions::assert_eq;
use tqec::*;

fn corner(k: i64) -> ScalableCorner {
    ScalableCorner::new(LinearFunction::with_slope(2).unwrap(), k).unwrap()
}

fn all_indices(template: &dyn Template) -> Vec<PlaquetteIndex> {
    default_indices(template)
}

// ═══════════════════════════════════════════════════════════════════════
// Shape Progression
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_corner_shape_follows_scale_function() {
    let mut corner = corner(2);
    assert_eq!(corner.shape(), Shape2D::new(4, 4));

    corner.scale_to(4).unwrap();
    assert_eq!(corner.shape(), Shape2D::new(8, 8));

    corner.scale_to(10).unwrap();
    assert_eq!(corner.shape(), Shape2D::new(20, 20));
    assert_eq!(corner.dimension(), 20);
}

#[test]
fn test_corner_with_intercept() {
    let function = LinearFunction::new(3, 1).unwrap();
    let mut corner = ScalableCorner::new(function, 1).unwrap();
    assert_eq!(corner.shape(), Shape2D::new(4, 4));
    corner.scale_to(5).unwrap();
    assert_eq!(corner.shape(), Shape2D::new(16, 16));
    assert_eq!(corner.function(), function);
}

#[test]
fn test_expected_plaquettes_survive_rescaling() {
    let mut corner = corner(2);
    let expected = corner.expected_plaquettes_number();
    assert_eq!(expected, 6);
    for k in [1, 7, 3, 3, 100, 2] {
        corner.scale_to(k).unwrap();
        assert_eq!(corner.expected_plaquettes_number(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Scale Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_scale_to_zero_or_negative_fails() {
    let mut corner = corner(2);
    for k in [0, -1, -2500] {
        assert!(matches!(
            corner.scale_to(k),
            Err(TemplateError::InvalidScale { .. })
        ));
    }
    assert!(matches!(
        ScalableCorner::new(LinearFunction::default(), 0),
        Err(TemplateError::InvalidScale { k: 0, .. })
    ));
}

#[test]
fn test_failed_scale_leaves_corner_untouched() {
    let mut corner = corner(3);
    let before = corner.instantiate(&all_indices(&corner)).unwrap();
    assert!(corner.scale_to(0).is_err());
    assert_eq!(corner.scale(), 3);
    assert_eq!(corner.shape(), Shape2D::new(6, 6));
    assert_eq!(corner.instantiate(&all_indices(&corner)).unwrap(), before);
}

#[test]
fn test_failures_are_deterministic() {
    let mut corner = corner(2);
    let first = corner.scale_to(-4).unwrap_err();
    let second = corner.scale_to(-4).unwrap_err();
    assert_eq!(first, second);

    let first = corner.instantiate(&[1, 2]).unwrap_err();
    let second = corner.instantiate(&[1, 2]).unwrap_err();
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Instantiation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_corner_layout_at_scale_three() {
    let array = corner(3).instantiate(&[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(
        array.into_rows(),
        vec![
            vec![1, 2, 0, 0, 0, 0],
            vec![2, 1, 0, 0, 0, 0],
            vec![1, 2, 0, 0, 0, 0],
            vec![2, 1, 0, 0, 0, 0],
            vec![3, 4, 1, 2, 1, 2],
            vec![5, 6, 2, 1, 2, 1],
        ]
    );
}

#[test]
fn test_non_empty_cells_match_region_cells() {
    for k in [1, 2, 3, 10, 57] {
        let corner = corner(k);
        let array = corner.instantiate(&all_indices(&corner)).unwrap();
        let d = corner.dimension();
        assert_eq!(array.count_non_empty(), corner.active_cells());
        assert_eq!(array.count_non_empty(), 4 * d - 4);
    }
}

#[test]
fn test_every_cell_is_supplied_index_or_empty() {
    let corner = corner(6);
    let indices = [11, 12, 13, 14, 15, 16];
    let array = corner.instantiate(&indices).unwrap();
    assert!(array
        .as_slice()
        .iter()
        .all(|cell| *cell == EMPTY_PLAQUETTE || indices.contains(cell)));
}

#[test]
fn test_junction_keeps_constant_size() {
    for k in [1, 5, 40] {
        let corner = corner(k);
        let regions = corner.regions();
        assert_eq!(
            regions.region_shape(corner::JUNCTION_REGION),
            Some(Shape2D::new(corner::JUNCTION, corner::JUNCTION))
        );
        let array = corner.instantiate(&[1, 2, 3, 4, 5, 6]).unwrap();
        let d = corner.dimension();
        assert_eq!(array.get(0, d - 2), Some(3));
        assert_eq!(array.get(1, d - 2), Some(4));
        assert_eq!(array.get(0, d - 1), Some(5));
        assert_eq!(array.get(1, d - 1), Some(6));
    }
}

#[test]
fn test_corner_at_scale_2500() {
    let corner = corner(2500);
    let indices: Vec<PlaquetteIndex> = (1..=corner.expected_plaquettes_number() as u32).collect();
    let array = corner.instantiate(&indices).unwrap();
    assert_eq!(array.shape(), corner.shape());
    assert_eq!(array.shape(), Shape2D::new(5000, 5000));
    assert_eq!(array.count_non_empty(), 4 * 5000 - 4);
    assert_eq!(array.get(4999, 4999), Some(1));
    assert_eq!(array.get(4999, 0), Some(EMPTY_PLAQUETTE));
}

#[test]
fn test_corner_overflow_is_reported() {
    let corner = corner(2500);
    let ctx = InstantiationContext::with_max_cells(1_000_000);
    assert_eq!(
        corner.instantiate_with(&all_indices(&corner), &ctx),
        Err(TemplateError::GeometryOverflow {
            width: 5000,
            height: 5000,
            max_cells: 1_000_000
        })
    );
}

#[test]
fn test_render_small_corner() {
    let corner = corner(2);
    assert_eq!(
        render_template(&corner).unwrap(),
        "1  2  .  .\n2  1  .  .\n3  4  1  2\n5  6  2  1\n"
    );
}
