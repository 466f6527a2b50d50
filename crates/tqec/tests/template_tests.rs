//! Composition and instantiation tests

use pretty_assertions::assert_eq;
use tqec::*;

fn cell() -> Box<dyn Template> {
    Box::new(RawRectangleTemplate::new(vec![vec![0]]).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════
// Arity and Sentinel
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_indices_fail_with_arity_mismatch() {
    let corner = ScalableCorner::new(LinearFunction::default(), 2).unwrap();
    assert_eq!(
        corner.instantiate(&[]),
        Err(TemplateError::ArityMismatch {
            expected: 6,
            got: 0
        })
    );
}

#[test]
fn test_too_many_indices_fail() {
    let square = AlternatingSquareTemplate::new(Dimension::fixed(2), 1).unwrap();
    assert_eq!(
        square.instantiate(&[1, 2, 3]),
        Err(TemplateError::ArityMismatch {
            expected: 2,
            got: 3
        })
    );
}

#[test]
fn test_sentinel_index_is_rejected() {
    let square = AlternatingSquareTemplate::new(Dimension::fixed(2), 1).unwrap();
    assert_eq!(
        square.instantiate(&[0, 2]),
        Err(TemplateError::ReservedPlaquetteIndex { position: 0 })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Ownership of Results
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_instantiations_do_not_share_storage() {
    let corner = ScalableCorner::new(LinearFunction::default(), 2).unwrap();
    let indices = [1, 2, 3, 4, 5, 6];
    let mut first = corner.instantiate(&indices).unwrap();
    first.canvas().set(3, 0, 99);

    let second = corner.instantiate(&indices).unwrap();
    assert_eq!(first.get(3, 0), Some(99));
    assert_eq!(second.get(3, 0), Some(EMPTY_PLAQUETTE));
}

#[test]
fn test_rescale_after_instantiation_does_not_touch_array() {
    let mut corner = ScalableCorner::new(LinearFunction::default(), 2).unwrap();
    let array = corner.instantiate(&[1, 2, 3, 4, 5, 6]).unwrap();
    corner.scale_to(5).unwrap();
    assert_eq!(array.shape(), Shape2D::new(4, 4));
    assert_eq!(corner.shape(), Shape2D::new(10, 10));
}

// ═══════════════════════════════════════════════════════════════════════
// Composition
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_composed_later_region_wins() {
    let mut composed = ComposedTemplate::new(1).unwrap();
    let block = RawRectangleTemplate::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
    composed
        .add_region("block", Box::new(block), ScalableOffset::fixed(0, 0), vec![0])
        .unwrap()
        .add_region("corner", cell(), ScalableOffset::fixed(1, 1), vec![1])
        .unwrap();
    assert_eq!(
        composed.instantiate(&[4, 8]).unwrap().into_rows(),
        vec![vec![4, 4], vec![4, 8]]
    );

    let mut reversed = ComposedTemplate::new(1).unwrap();
    let block = RawRectangleTemplate::new(vec![vec![0, 0], vec![0, 0]]).unwrap();
    reversed
        .add_region("corner", cell(), ScalableOffset::fixed(1, 1), vec![0])
        .unwrap()
        .add_region("block", Box::new(block), ScalableOffset::fixed(0, 0), vec![1])
        .unwrap();
    assert_eq!(
        reversed.instantiate(&[8, 4]).unwrap().into_rows(),
        vec![vec![4, 4], vec![4, 4]]
    );
}

#[test]
fn test_composed_gaps_stay_empty() {
    let mut composed = ComposedTemplate::new(1).unwrap();
    composed
        .add_region("a", cell(), ScalableOffset::fixed(0, 0), vec![0])
        .unwrap()
        .add_region("b", cell(), ScalableOffset::fixed(2, 1), vec![1])
        .unwrap();
    assert_eq!(composed.shape(), Shape2D::new(3, 2));
    assert_eq!(
        composed.instantiate(&[1, 2]).unwrap().into_rows(),
        vec![vec![1, 0, 0], vec![0, 0, 2]]
    );
}

#[test]
fn test_nested_composition() {
    let inner = ScalableCorner::new(LinearFunction::default(), 1).unwrap();
    let mut outer = ComposedTemplate::new(1).unwrap();
    outer
        .add_region(
            "corner",
            Box::new(inner),
            ScalableOffset::fixed(1, 0),
            vec![0, 1, 2, 3, 4, 5],
        )
        .unwrap();
    assert_eq!(outer.shape(), Shape2D::new(3, 2));
    assert_eq!(
        outer.instantiate(&[1, 2, 3, 4, 5, 6]).unwrap().into_rows(),
        vec![vec![0, 3, 4], vec![0, 5, 6]]
    );

    outer.scale_to(2).unwrap();
    assert_eq!(outer.shape(), Shape2D::new(5, 4));
}

/// The corner layout placed with absolute offsets only.
fn corner_from_offsets(k: i64) -> ComposedTemplate {
    let arm = Dimension::linear(2, -2).unwrap();
    let thickness = Dimension::fixed(2);
    let mut composed = ComposedTemplate::new(k).unwrap();
    composed
        .add_region(
            "vertical_arm",
            Box::new(AlternatingRectangleTemplate::new(thickness, arm, k).unwrap()),
            ScalableOffset::fixed(0, 0),
            vec![0, 1],
        )
        .unwrap()
        .add_region(
            "horizontal_arm",
            Box::new(AlternatingRectangleTemplate::new(arm, thickness, k).unwrap()),
            ScalableOffset::new(thickness, arm),
            vec![0, 1],
        )
        .unwrap()
        .add_region(
            "junction",
            Box::new(RawRectangleTemplate::new(vec![vec![0, 1], vec![2, 3]]).unwrap()),
            ScalableOffset::new(Dimension::fixed(0), arm),
            vec![2, 3, 4, 5],
        )
        .unwrap();
    composed
}

#[test]
fn test_relative_corner_matches_offset_corner() {
    let indices = [1, 2, 3, 4, 5, 6];
    let mut relative = ScalableCorner::new(LinearFunction::default(), 1).unwrap();
    for k in [1, 2, 5, 13] {
        relative.scale_to(k).unwrap();
        let absolute = corner_from_offsets(k);
        assert_eq!(relative.shape(), absolute.shape());
        assert_eq!(
            relative.instantiate(&indices).unwrap(),
            absolute.instantiate(&indices).unwrap()
        );
        for name in ["vertical_arm", "horizontal_arm", "junction"] {
            assert_eq!(
                relative.regions().region_offset(name),
                absolute.region_offset(name)
            );
        }
    }
}

#[test]
fn test_corner_square_in_composition() {
    let square = AlternatingCornerSquareTemplate::new(
        Dimension::linear(1, 0).unwrap(),
        CornerPosition::LowerLeft,
        2,
    )
    .unwrap();
    let mut composed = ComposedTemplate::new(2).unwrap();
    composed
        .add_region(
            "square",
            Box::new(square),
            ScalableOffset::fixed(0, 0),
            vec![0, 1, 2, 3, 4],
        )
        .unwrap()
        .add_region("cap", cell(), ScalableOffset::default(), vec![5])
        .unwrap()
        .add_relative_position(
            "square",
            "cap",
            CornerPosition::UpperRight,
            CornerPosition::UpperLeft,
        )
        .unwrap();
    assert_eq!(
        composed.instantiate(&[1, 2, 3, 4, 5, 6]).unwrap().into_rows(),
        vec![vec![3, 4, 6], vec![1, 5, 0]]
    );
    assert_eq!(composed.active_cells(), 5);
}

#[test]
fn test_stacked_shifted_templates() {
    let square = AlternatingSquareTemplate::new(Dimension::linear(1, 0).unwrap(), 2).unwrap();
    let shifted = ShiftedTemplate::new(cell(), ScalableOffset::fixed(1, 1), 2).unwrap();
    let mut stack = StackedTemplate::new();
    stack.push_template_on_top(Box::new(square));
    stack.push_template_on_top(Box::new(shifted));
    assert_eq!(stack.expected_plaquettes_number(), 3);
    assert_eq!(
        stack.instantiate(&[1, 2, 7]).unwrap().into_rows(),
        vec![vec![1, 2], vec![2, 7]]
    );

    stack.scale_to(3).unwrap();
    assert_eq!(stack.shape(), Shape2D::new(3, 3));
}

#[test]
fn test_template_with_indices() {
    let corner = ScalableCorner::new(LinearFunction::default(), 1).unwrap();
    assert!(TemplateWithIndices::new(Box::new(corner), vec![1, 2, 3]).is_err());

    let corner = ScalableCorner::new(LinearFunction::default(), 1).unwrap();
    let mut wrapped = TemplateWithIndices::new(Box::new(corner), vec![1, 2, 3, 4, 5, 6]).unwrap();
    wrapped.scale_to(2).unwrap();
    assert_eq!(wrapped.instantiate().unwrap().shape(), Shape2D::new(4, 4));
}

// ═══════════════════════════════════════════════════════════════════════
// Serialization
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_array_serializes_shape_and_cells() {
    let corner = ScalableCorner::new(LinearFunction::default(), 1).unwrap();
    let array = corner.instantiate(&[1, 2, 3, 4, 5, 6]).unwrap();
    let json = serde_json::to_string(&array).unwrap();
    assert_eq!(json, r#"{"shape":{"x":2,"y":2},"cells":[3,4,5,6]}"#);
    let parsed: PlaquetteArray = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, array);
}

#[test]
fn test_dimension_serialization() {
    let dim = Dimension::linear(2, 1).unwrap();
    let json = serde_json::to_string(&dim).unwrap();
    assert_eq!(json, r#"{"linear":{"slope":2,"intercept":1}}"#);
    assert_eq!(serde_json::from_str::<Dimension>(&json).unwrap(), dim);
    assert_eq!(
        serde_json::to_string(&Dimension::fixed(3)).unwrap(),
        r#"{"fixed":3}"#
    );
}
