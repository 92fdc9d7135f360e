use super::*;

fn canvas() -> Canvas {
    Canvas::new(800, 600).unwrap()
}

#[test]
fn vertical_segment_of_length_100_yields_21_points() {
    let seg = OutlineSegment::new(0.0, 0.0, 0.0, 100.0);
    let mesh = build_mesh(&[seg], canvas(), MeshParams::default()).unwrap();

    assert_eq!(mesh.len(), 21);
    assert_eq!(mesh.runs(), &[SegmentRun { start: 0, len: 21 }]);

    // Height 100 maps to 400px, centered on (400, 300).
    let first = mesh.current()[0];
    let last = mesh.current()[20];
    assert!((first.x - 400.0).abs() < 1e-9);
    assert!((first.y - 100.0).abs() < 1e-9);
    assert!((last.x - 400.0).abs() < 1e-9);
    assert!((last.y - 500.0).abs() < 1e-9);
}

#[test]
fn each_segment_yields_steps_plus_one_points_with_exact_endpoints() {
    let segs = [
        OutlineSegment::new(0.0, 0.0, 13.0, 0.0),
        OutlineSegment::new(13.0, 0.0, 13.0, 40.0),
        OutlineSegment::new(13.0, 40.0, 2.0, 31.0),
    ];
    let params = MeshParams {
        sample_spacing: 5.0,
        font_size: 40.0,
    };
    let c = Canvas::new(40, 40).unwrap();
    let mesh = build_mesh(&segs, c, params).unwrap();

    assert_eq!(mesh.runs().len(), segs.len());
    let bounds = OutlineBounds::of(&segs).unwrap();
    let scale = params.font_size / bounds.h;
    let map = |p: Point| c.center() + (p - bounds.center()) * scale;

    for (seg, run) in segs.iter().zip(mesh.runs()) {
        let steps = segment_steps(seg, 5.0);
        assert_eq!(steps, (seg.length() / 5.0).ceil() as usize);
        assert_eq!(run.len, steps + 1);

        let first = mesh.rest()[run.start];
        let last = mesh.rest()[run.start + run.len - 1];
        assert!((first - map(seg.start())).hypot() < 1e-9);
        assert!((last - map(seg.end())).hypot() < 1e-9);
    }
}

#[test]
fn runs_tile_the_point_sequence() {
    let segs = [
        OutlineSegment::new(0.0, 0.0, 0.0, 50.0),
        OutlineSegment::new(0.0, 50.0, 20.0, 50.0),
    ];
    let mesh = build_mesh(&segs, canvas(), MeshParams::default()).unwrap();
    let mut next = 0;
    for run in mesh.runs() {
        assert_eq!(run.start, next);
        next = run.range().end;
    }
    assert_eq!(next, mesh.len());
    assert_eq!(mesh.current().len(), mesh.rest().len());
    assert_eq!(mesh.current(), mesh.rest());
}

#[test]
fn zero_length_segment_yields_one_point() {
    let segs = [
        OutlineSegment::new(0.0, 0.0, 0.0, 100.0),
        OutlineSegment::new(5.0, 5.0, 5.0, 5.0),
    ];
    let mesh = build_mesh(&segs, canvas(), MeshParams::default()).unwrap();
    assert_eq!(mesh.runs()[1], SegmentRun { start: 21, len: 1 });
    assert_eq!(mesh.len(), 22);
}

#[test]
fn empty_outline_builds_empty_mesh() {
    let mesh = build_mesh(&[], canvas(), MeshParams::default()).unwrap();
    assert!(mesh.is_empty());
    assert!(mesh.runs().is_empty());
}

#[test]
fn flat_outline_cannot_be_scaled() {
    let seg = OutlineSegment::new(0.0, 10.0, 100.0, 10.0);
    let err = build_mesh(&[seg], canvas(), MeshParams::default()).unwrap_err();
    assert!(matches!(err, GlyphwarpError::Outline(_)));
}

#[test]
fn invalid_params_are_rejected() {
    let seg = OutlineSegment::new(0.0, 0.0, 0.0, 100.0);
    let bad = MeshParams {
        sample_spacing: 0.0,
        ..MeshParams::default()
    };
    assert!(build_mesh(&[seg], canvas(), bad).is_err());
}

#[test]
fn reset_to_rest_discards_deformation() {
    let seg = OutlineSegment::new(0.0, 0.0, 0.0, 100.0);
    let mut mesh = build_mesh(&[seg], canvas(), MeshParams::default()).unwrap();
    mesh.current[3] = Point::new(-1.0, -1.0);
    mesh.reset_to_rest();
    assert_eq!(mesh.current(), mesh.rest());
}
