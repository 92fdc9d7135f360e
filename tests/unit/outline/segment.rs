use super::*;

#[test]
fn length_and_lerp_endpoints() {
    let s = OutlineSegment::new(0.0, 0.0, 3.0, 4.0);
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.lerp(0.0), Point::new(0.0, 0.0));
    assert_eq!(s.lerp(1.0), Point::new(3.0, 4.0));
    assert_eq!(s.lerp(0.5), Point::new(1.5, 2.0));
}

#[test]
fn bounds_cover_all_endpoints() {
    let segs = [
        OutlineSegment::new(10.0, 20.0, 30.0, 5.0),
        OutlineSegment::new(-4.0, 50.0, 12.0, 12.0),
    ];
    let b = OutlineBounds::of(&segs).unwrap();
    assert_eq!(b.x, -4.0);
    assert_eq!(b.y, 5.0);
    assert_eq!(b.w, 34.0);
    assert_eq!(b.h, 45.0);
    assert_eq!(b.center(), Point::new(13.0, 27.5));
}

#[test]
fn bounds_of_empty_outline_is_none() {
    assert!(OutlineBounds::of(&[]).is_none());
}

#[test]
fn non_finite_segments_are_detected() {
    assert!(OutlineSegment::new(0.0, 0.0, 1.0, 1.0).is_finite());
    assert!(!OutlineSegment::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
}
