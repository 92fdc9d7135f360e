use crate::{
    foundation::{
        core::{FrameIndex, Rgba8},
        error::{GlyphwarpError, GlyphwarpResult},
    },
    render::backend::FrameRGBA,
};

/// Frames per second every sink is fed at.
pub const RECORDING_FPS: u32 = 60;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Color transparent pixels are flattened onto.
    pub background: Rgba8,
}

impl SinkConfig {
    pub fn new(width: u32, height: u32, background: Rgba8) -> Self {
        Self {
            width,
            height,
            fps: RECORDING_FPS,
            background,
        }
    }
}

/// Consumer of rendered frames in strictly increasing [`FrameIndex`] order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlyphwarpResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GlyphwarpResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GlyphwarpResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphwarpResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GlyphwarpResult<()> {
        if self.cfg.is_none() {
            return Err(GlyphwarpError::encode("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx.0 <= last.0
        {
            return Err(GlyphwarpError::encode(
                "in-memory sink received out-of-order frame index",
            ));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GlyphwarpResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
