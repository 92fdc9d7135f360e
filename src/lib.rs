//! Glyphwarp turns a letter outline into a deformable point mesh that stretches along the
//! cursor's motion, relaxes back to rest, cycles through radial color rings and sheds particles.
//!
//! The core is a single-threaded [`Simulation`] stepped once per frame:
//!
//! - Load an outline through an [`OutlineSource`]
//! - Call [`Simulation::advance`] with the cursor position to get a [`RenderFrame`]
//! - Rasterize it with [`CpuRenderer`], export it with [`frame_to_svg`] / [`write_png`], or
//!   stream frames into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod driver;
pub(crate) mod encode;
pub(crate) mod export;
pub(crate) mod mesh;
pub(crate) mod outline;
pub(crate) mod paint;
pub(crate) mod particles;
pub(crate) mod render;
pub(crate) mod sim;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rgba8, Vec2};
pub use crate::foundation::error::{GlyphwarpError, GlyphwarpResult};

pub use crate::driver::cursor::{CursorKey, CursorScript};
pub use crate::driver::run::{FRAME_DT, RunOutcome, run_frames};
pub use crate::encode::ffmpeg::{
    FfmpegSink, FfmpegSinkOpts, VideoCodec, ffmpeg_has_encoder, is_ffmpeg_on_path,
};
pub use crate::encode::sink::{FrameSink, InMemorySink, RECORDING_FPS, SinkConfig};
pub use crate::export::png::{PNG_EXPORT_SCALE, export_png, write_png};
pub use crate::export::svg::{frame_to_svg, write_svg};
pub use crate::export::{ensure_parent_dir, export_file_name, timestamped_file_name};
pub use crate::mesh::builder::{
    FONT_SIZE, Mesh, MeshParams, SAMPLE_SPACING, SegmentRun, build_mesh, segment_steps,
};
pub use crate::mesh::deform::{DeformParams, RETURN_FORCE, deform_step, influence};
pub use crate::outline::segment::{OutlineBounds, OutlineSegment};
pub use crate::outline::source::{
    DirOutlineSource, InMemoryOutlineSource, OutlineSource, normalize_letter,
};
pub use crate::outline::svg::parse_outline_svg;
pub use crate::paint::palette::{ColorSelection, DEFAULT_COLOR, PALETTE};
pub use crate::paint::radial::{CLOCK_TO_PIXELS, RING_WIDTH, radial_color};
pub use crate::particles::particle::{FadingParticle, StaticParticle};
pub use crate::particles::system::{
    DETECTION_RADIUS, PARTICLES_PER_INTENSITY, ParticleSystem, REGENERATION_DELAY_MS,
};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuRenderer;
pub use crate::sim::config::{ColorMode, Config, DARK_BACKGROUND, LIGHT_BACKGROUND, Theme};
pub use crate::sim::frame::{CaptureFormat, RenderFrame, StrokeSegment, mesh_strokes};
pub use crate::sim::state::{CAPTURE_COUNTDOWN_FRAMES, CLOCK_STEP, Simulation};
