//! Tests for `#[derive(BaseObject)]`.
//!
//! The derive compares every field with `==`, in declaration order, except
//! the fields marked `#[base_object(skip)]`.

#![cfg(feature = "derive")]

use fnkit::util::{BaseObject, base_object_eq};
use rstest::rstest;

// =============================================================================
// Test structures
// =============================================================================

#[derive(Debug, BaseObject)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, BaseObject)]
struct CachedUser {
    id: u64,
    name: String,
    #[base_object(skip)]
    lookups: usize,
}

#[derive(Debug, BaseObject)]
struct Labelled<T> {
    label: &'static str,
    value: T,
}

#[derive(Debug, BaseObject)]
struct Meters(f64);

#[derive(Debug, BaseObject)]
struct Marker;

// =============================================================================
// Tests
// =============================================================================

#[rstest]
#[case(Point { x: 1, y: 2 }, Point { x: 1, y: 2 }, true)]
#[case(Point { x: 1, y: 2 }, Point { x: 1, y: 3 }, false)]
#[case(Point { x: 0, y: 2 }, Point { x: 1, y: 2 }, false)]
fn named_fields(#[case] left: Point, #[case] right: Point, #[case] expected: bool) {
    assert_eq!(left.equals(&right), expected);
}

#[rstest]
fn skipped_fields_do_not_affect_equality() {
    let cold = CachedUser {
        id: 7,
        name: "ada".to_string(),
        lookups: 0,
    };
    let warm = CachedUser {
        id: 7,
        name: "ada".to_string(),
        lookups: 120,
    };
    assert!(cold.equals(&warm));
    assert_ne!(cold.lookups, warm.lookups);
}

#[rstest]
fn generic_struct_compares_generic_field() {
    let left = Labelled {
        label: "v",
        value: vec![1, 2],
    };
    let right = Labelled {
        label: "v",
        value: vec![1, 2],
    };
    let other = Labelled {
        label: "v",
        value: vec![2, 1],
    };
    assert!(left.equals(&right));
    assert!(!left.equals(&other));
}

#[rstest]
fn tuple_and_unit_structs() {
    assert!(Meters(1.5).equals(&Meters(1.5)));
    assert!(!Meters(1.5).equals(&Meters(2.0)));
    assert!(Marker.equals(&Marker));
}

#[rstest]
fn absent_aware_comparison() {
    let point = Point { x: 3, y: 4 };
    assert!(base_object_eq(Some(&point), Some(&Point { x: 3, y: 4 })));
    assert!(!base_object_eq(Some(&point), None));
    assert!(base_object_eq::<Point>(None, None));
}

#[rstest]
fn derived_types_compose_with_collection_impls() {
    let left = vec![Point { x: 1, y: 1 }, Point { x: 2, y: 2 }];
    let right = vec![Point { x: 1, y: 1 }, Point { x: 2, y: 2 }];
    assert!(left.equals(&right));
    assert!(Some(Point { x: 0, y: 0 }).equals(&Some(Point { x: 0, y: 0 })));
}
