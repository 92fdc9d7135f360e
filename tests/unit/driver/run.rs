use super::*;
use crate::{
    encode::sink::InMemorySink,
    foundation::core::{Canvas, Point},
    outline::{segment::OutlineSegment, source::InMemoryOutlineSource},
    sim::{config::Config, frame::CaptureFormat},
};

fn sim() -> Simulation {
    let source = InMemoryOutlineSource::new().with(
        "a",
        vec![
            OutlineSegment::new(0.0, 0.0, 20.0, 100.0),
            OutlineSegment::new(20.0, 100.0, 40.0, 0.0),
        ],
    );
    let mut sim =
        Simulation::with_seed(Canvas::new(64, 48).unwrap(), Config::default(), 1).unwrap();
    sim.load_outline(&source).unwrap();
    sim
}

#[test]
fn frame_dt_is_one_sixtieth_of_a_second() {
    assert!((FRAME_DT.as_secs_f64() * 60.0 - 1.0).abs() < 1e-6);
}

#[test]
fn runs_requested_frames_into_sink() {
    let mut sim = sim();
    let mut sink = InMemorySink::new();
    let script = CursorScript::sweep(sim.canvas(), 10);
    let out = run_frames(
        &mut sim,
        &script,
        10,
        &mut CpuRenderer::new(),
        Some(&mut sink),
    )
    .unwrap();

    assert_eq!(sink.frames().len(), 10);
    assert!(sink.is_finished());
    assert_eq!(sink.frames()[9].0, FrameIndex(9));
    assert_eq!(sink.frames()[0].1.width, 64);
    assert_eq!(out.last.index, FrameIndex(9));
    assert!(out.captures.is_empty());
}

#[test]
fn pending_capture_is_reported_once() {
    let mut sim = sim();
    sim.request_capture(CaptureFormat::Png, 5);
    let script = CursorScript::still(Point::new(0.0, 0.0));
    let out = run_frames(&mut sim, &script, 8, &mut CpuRenderer::new(), None).unwrap();
    assert_eq!(out.captures.len(), 1);
    assert_eq!(out.captures[0].index, FrameIndex(4));
    assert_eq!(out.captures[0].capture, Some(CaptureFormat::Png));
}

#[test]
fn zero_frames_is_rejected() {
    let mut sim = sim();
    let script = CursorScript::still(Point::ZERO);
    assert!(run_frames(&mut sim, &script, 0, &mut CpuRenderer::new(), None).is_err());
}
