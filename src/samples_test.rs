#![allow(clippy::float_cmp)]

use super::*;
use crate::shape::ShapeKind;

fn viewport() -> Size {
    Size::new(640.0, 480.0)
}

#[test]
fn empty_until_first_refresh() {
    let samples = SamplePoints::new(100, 1);
    assert!(samples.points().is_empty());
}

#[test]
fn first_refresh_generates_count_points() {
    let mut samples = SamplePoints::new(250, 1);
    assert!(samples.refresh(viewport()));
    assert_eq!(samples.points().len(), 250);
}

#[test]
fn points_are_whole_pixels_inside_viewport() {
    let mut samples = SamplePoints::new(500, 7);
    samples.refresh(viewport());
    for p in samples.points() {
        assert!((0.0..=640.0).contains(&p.x));
        assert!((0.0..=480.0).contains(&p.y));
        assert_eq!(p.x.fract(), 0.0);
        assert_eq!(p.y.fract(), 0.0);
    }
}

#[test]
fn same_size_keeps_cache() {
    let mut samples = SamplePoints::new(50, 3);
    samples.refresh(viewport());
    let before = samples.points().to_vec();
    assert!(!samples.refresh(viewport()));
    assert_eq!(samples.points(), before.as_slice());
}

#[test]
fn size_change_regenerates() {
    let mut samples = SamplePoints::new(50, 3);
    samples.refresh(viewport());
    assert!(samples.refresh(Size::new(320.0, 200.0)));
    for p in samples.points() {
        assert!(p.x <= 320.0 && p.y <= 200.0);
    }
}

#[test]
fn same_seed_same_points() {
    let mut a = SamplePoints::new(20, 99);
    let mut b = SamplePoints::new(20, 99);
    a.refresh(viewport());
    b.refresh(viewport());
    assert_eq!(a.points(), b.points());
}

#[test]
fn zero_sized_viewport_collapses_to_origin() {
    let mut samples = SamplePoints::new(10, 5);
    samples.refresh(Size::new(0.0, 0.0));
    assert!(samples.points().iter().all(|p| *p == Point::new(0.0, 0.0)));
}

#[test]
fn classify_matches_shape_containment() {
    let mut shape = RotatingShape::from_kind(ShapeKind::Logo, 100.0, 0.0015, false).unwrap();
    shape.tick(0.0, viewport());
    let mut samples = SamplePoints::new(300, 11);
    samples.refresh(viewport());
    let classified: Vec<(Point, bool)> = samples.classify(&shape).collect();
    assert_eq!(classified.len(), 300);
    for (p, inside) in classified {
        assert_eq!(inside, shape.contains_point(p));
    }
}
