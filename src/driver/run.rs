use std::time::Duration;

use crate::{
    driver::cursor::CursorScript,
    encode::sink::{FrameSink, SinkConfig},
    foundation::{
        core::FrameIndex,
        error::{GlyphwarpError, GlyphwarpResult},
    },
    render::cpu::CpuRenderer,
    sim::{frame::RenderFrame, state::Simulation},
};

/// Wall-clock time per frame at the 60 Hz display rate.
pub const FRAME_DT: Duration = Duration::from_nanos(16_666_667);

/// Result of a headless run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// The last frame produced.
    pub last: RenderFrame,
    /// Frames that carried a due capture, in order.
    pub captures: Vec<RenderFrame>,
}

/// Advance `sim` for `frames` frames along `script`.
///
/// When a sink is given every frame is rasterized at 1x and pushed to it between `begin` and
/// `end`. The frame index passed to the sink counts from zero for this run.
#[tracing::instrument(skip(sim, script, renderer, sink))]
pub fn run_frames(
    sim: &mut Simulation,
    script: &CursorScript,
    frames: u64,
    renderer: &mut CpuRenderer,
    mut sink: Option<&mut dyn FrameSink>,
) -> GlyphwarpResult<RunOutcome> {
    if frames == 0 {
        return Err(GlyphwarpError::validation("frames must be >= 1"));
    }

    if let Some(sink) = sink.as_deref_mut() {
        let canvas = sim.canvas();
        sink.begin(SinkConfig::new(
            canvas.width,
            canvas.height,
            sim.config().effective_background(),
        ))?;
    }

    let mut captures = Vec::new();
    let mut last = None;
    for i in 0..frames {
        let frame = sim.advance(FRAME_DT, script.at(i));
        if let Some(sink) = sink.as_deref_mut() {
            let image = renderer.render(&frame, 1.0)?;
            sink.push_frame(FrameIndex(i), &image)?;
        }
        if frame.capture.is_some() {
            tracing::debug!(frame = i, "capture due");
            captures.push(frame.clone());
        }
        last = Some(frame);
    }

    if let Some(sink) = sink.as_deref_mut() {
        sink.end()?;
    }

    let last = last.ok_or_else(|| GlyphwarpError::validation("no frames were produced"))?;
    tracing::debug!(captures = captures.len(), "run finished");
    Ok(RunOutcome { last, captures })
}

#[cfg(test)]
#[path = "../../tests/unit/driver/run.rs"]
mod tests;
