#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ElementKind serde
// =============================================================

#[test]
fn kind_serde_roundtrip() {
    let json = serde_json::to_string(&ElementKind::Rect).unwrap();
    assert_eq!(json, "\"rect\"");
    let back: ElementKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ElementKind::Rect);
}

#[test]
fn kind_serde_all_variants() {
    let cases = [(ElementKind::Line, "\"line\""), (ElementKind::Rect, "\"rect\"")];
    for (kind, expected) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        let back: ElementKind = serde_json::from_str(expected).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn kind_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<ElementKind>("\"ellipse\"").is_err());
}

// =============================================================
// begin
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ElementStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.active().is_none());
}

#[test]
fn begin_creates_degenerate_shape() {
    let mut store = ElementStore::new();
    let id = store.begin(ElementKind::Line, Point::new(100.0, 100.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.active(), Some(id));

    let element = &store.elements()[0];
    assert_eq!(element.id, id);
    assert_eq!(element.kind, ElementKind::Line);
    assert_eq!((element.x1, element.y1), (100.0, 100.0));
    assert_eq!((element.x2, element.y2), (100.0, 100.0));
}

#[test]
fn begin_assigns_distinct_ids() {
    let mut store = ElementStore::new();
    let a = store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    store.end().unwrap();
    let b = store.begin(ElementKind::Rect, Point::new(1.0, 1.0));
    assert_ne!(a, b);
}

// =============================================================
// extend
// =============================================================

#[test]
fn extend_replaces_second_endpoint() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Line, Point::new(100.0, 100.0));
    store.extend(Point::new(150.0, 120.0)).unwrap();

    let element = &store.elements()[0];
    assert_eq!((element.x1, element.y1), (100.0, 100.0));
    assert_eq!((element.x2, element.y2), (150.0, 120.0));
}

#[test]
fn extend_regenerates_the_sketch() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    let degenerate = store.elements()[0].sketch.clone();
    store.extend(Point::new(10.0, 10.0)).unwrap();
    let extended = &store.elements()[0].sketch;
    assert_ne!(*extended, degenerate);
    assert_eq!(extended.strokes[0].1, Point::new(10.0, 10.0));
}

#[test]
fn repeated_extends_mutate_in_place() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    for i in 1..=5 {
        store.extend(Point::new(f64::from(i), 0.0)).unwrap();
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.elements()[0].x2, 5.0);
}

#[test]
fn extend_without_active_shape_errors() {
    let mut store = ElementStore::new();
    assert_eq!(store.extend(Point::new(1.0, 1.0)), Err(SketchError::NoActiveShape));
    assert!(store.is_empty());
}

#[test]
fn extend_after_end_errors() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    store.end().unwrap();
    assert_eq!(store.extend(Point::new(9.0, 9.0)), Err(SketchError::NoActiveShape));
    // The frozen shape is untouched.
    assert_eq!(store.elements()[0].x2, 0.0);
}

// =============================================================
// end
// =============================================================

#[test]
fn end_deactivates_and_keeps_the_shape() {
    let mut store = ElementStore::new();
    let id = store.begin(ElementKind::Rect, Point::new(5.0, 5.0));
    let done = store.end().unwrap();
    assert_eq!(done, id);
    assert!(store.active().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn end_without_active_shape_errors() {
    let mut store = ElementStore::new();
    assert_eq!(store.end(), Err(SketchError::NoActiveShape));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_returns_the_element() {
    let mut store = ElementStore::new();
    let id = store.begin(ElementKind::Line, Point::new(1.0, 2.0));
    store.end().unwrap();
    let removed = store.remove(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.is_empty());
}

#[test]
fn remove_unknown_id_returns_none() {
    let mut store = ElementStore::new();
    assert!(store.remove(Uuid::new_v4()).is_none());
}

#[test]
fn remove_does_not_affect_other_elements() {
    let mut store = ElementStore::new();
    let a = store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    store.end().unwrap();
    let b = store.begin(ElementKind::Rect, Point::new(1.0, 1.0));
    store.end().unwrap();
    store.remove(a);
    assert_eq!(store.len(), 1);
    assert_eq!(store.elements()[0].id, b);
}

#[test]
fn remove_active_shape_clears_activity() {
    let mut store = ElementStore::new();
    let id = store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    store.remove(id);
    assert!(store.active().is_none());
    assert_eq!(store.extend(Point::new(1.0, 1.0)), Err(SketchError::NoActiveShape));
}

// =============================================================
// Sketch shapes
// =============================================================

#[test]
fn line_sketch_has_one_stroke() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Line, Point::new(0.0, 0.0));
    store.extend(Point::new(3.0, 4.0)).unwrap();
    assert_eq!(store.elements()[0].sketch.strokes.len(), 1);
}

#[test]
fn rect_sketch_has_four_edges() {
    let mut store = ElementStore::new();
    store.begin(ElementKind::Rect, Point::new(0.0, 0.0));
    store.extend(Point::new(10.0, 5.0)).unwrap();
    assert_eq!(store.elements()[0].sketch.strokes.len(), 4);
}
