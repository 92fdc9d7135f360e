use std::time::Duration;

use kurbo::Point;

use crate::{
    foundation::{
        core::{Canvas, FrameIndex},
        error::GlyphwarpResult,
    },
    mesh::{
        builder::{Mesh, MeshParams, SAMPLE_SPACING, build_mesh},
        deform::{DeformParams, deform_step},
    },
    outline::{segment::OutlineSegment, source::OutlineSource},
    paint::palette::ColorSelection,
    particles::system::ParticleSystem,
    sim::{
        config::Config,
        frame::{CaptureFormat, RenderFrame, mesh_strokes},
    },
};

/// Clock advance per frame at a color animation speed of 1.
pub const CLOCK_STEP: f64 = 0.05;

/// Frames a requested capture waits before it fires, so the letter can settle.
pub const CAPTURE_COUNTDOWN_FRAMES: u32 = 180;

#[derive(Clone, Copy, Debug)]
struct PendingCapture {
    format: CaptureFormat,
    remaining: u32,
}

/// The whole interactive state: configuration, mesh, particles and animation clock.
///
/// Drive it with [`Simulation::advance`] once per frame; every call returns the [`RenderFrame`]
/// to draw.
#[derive(Clone, Debug)]
pub struct Simulation {
    canvas: Canvas,
    config: Config,
    outline: Vec<OutlineSegment>,
    mesh: Mesh,
    particles: ParticleSystem,
    clock: f64,
    prev_cursor: Option<Point>,
    elapsed: Duration,
    frame: FrameIndex,
    capture: Option<PendingCapture>,
}

impl Simulation {
    pub fn new(canvas: Canvas, config: Config) -> GlyphwarpResult<Self> {
        Self::with_particles(canvas, config, ParticleSystem::new())
    }

    /// Deterministic particle placement, for tests and offline rendering.
    pub fn with_seed(canvas: Canvas, config: Config, seed: u64) -> GlyphwarpResult<Self> {
        Self::with_particles(canvas, config, ParticleSystem::with_seed(seed))
    }

    fn with_particles(
        canvas: Canvas,
        config: Config,
        particles: ParticleSystem,
    ) -> GlyphwarpResult<Self> {
        config.validate()?;
        Ok(Self {
            canvas,
            config,
            outline: Vec::new(),
            mesh: Mesh::empty(),
            particles,
            clock: 0.0,
            prev_cursor: None,
            elapsed: Duration::ZERO,
            frame: FrameIndex::default(),
            capture: None,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Direct access for the setters that do not touch simulation state. Particle options go
    /// through [`Simulation::set_particle_intensity`] and [`Simulation::set_particle_colors`].
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn frame_index(&self) -> FrameIndex {
        self.frame
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_capture_pending(&self) -> bool {
        self.capture.is_some()
    }

    fn mesh_params(&self) -> MeshParams {
        MeshParams {
            sample_spacing: SAMPLE_SPACING,
            font_size: self.config.font_size(),
        }
    }

    /// Load the outline for the configured letter and rebuild the mesh.
    ///
    /// On failure the mesh is left empty and the error is returned; the simulation keeps running
    /// and simply draws no letter.
    #[tracing::instrument(skip(self, source), fields(letter = %self.config.letter()))]
    pub fn load_outline(&mut self, source: &dyn OutlineSource) -> GlyphwarpResult<()> {
        self.outline.clear();
        self.mesh = Mesh::empty();
        self.particles.clear();

        let params = self.mesh_params();
        let built = source
            .load(self.config.letter())
            .and_then(|segs| build_mesh(&segs, self.canvas, params).map(|m| (segs, m)));
        match built {
            Ok((segs, mesh)) => {
                tracing::info!(points = mesh.len(), "letter loaded");
                self.outline = segs;
                self.mesh = mesh;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load letter outline; drawing nothing");
                Err(e)
            }
        }
    }

    pub fn set_letter(&mut self, letter: &str, source: &dyn OutlineSource) -> GlyphwarpResult<()> {
        self.config.set_letter(letter)?;
        self.load_outline(source)
    }

    /// Resize the canvas and re-fit the current outline to it.
    pub fn set_canvas(&mut self, canvas: Canvas) -> GlyphwarpResult<()> {
        self.canvas = canvas;
        self.mesh = build_mesh(&self.outline, canvas, self.mesh_params())?;
        self.particles.clear();
        Ok(())
    }

    /// Change particle density. Clears both pools and, above zero, regenerates straight away.
    pub fn set_particle_intensity(&mut self, intensity: f64) -> GlyphwarpResult<()> {
        self.config.set_particle_intensity(intensity)?;
        self.particles.clear();
        if intensity > 0.0 {
            let colors = self.config.effective_particle_colors().clone();
            self.particles.generate(self.mesh.current(), intensity, &colors);
        }
        Ok(())
    }

    /// Change the particle colors. Clears both pools and lets them regenerate on the next frame.
    pub fn set_particle_colors(&mut self, colors: ColorSelection) {
        self.config.set_particle_selected_colors(colors);
        self.particles.clear();
        self.particles.rollback_debounce();
    }

    /// Restore default options, drop all particles, restart the clock and reload the letter.
    /// The theme survives.
    pub fn reset(&mut self, source: &dyn OutlineSource) -> GlyphwarpResult<()> {
        let theme = self.config.theme();
        self.config.reset();
        self.config.set_theme(theme);
        self.particles.clear();
        self.particles.rollback_debounce();
        self.clock = 0.0;
        self.capture = None;
        self.load_outline(source)
    }

    /// Schedule a capture `frames` frames from now (at least one). The cursor is reported hidden
    /// until it fires.
    pub fn request_capture(&mut self, format: CaptureFormat, frames: u32) {
        self.capture = Some(PendingCapture {
            format,
            remaining: frames.max(1),
        });
    }

    pub fn cancel_capture(&mut self) {
        self.capture = None;
    }

    fn tick_capture(&mut self) -> Option<CaptureFormat> {
        let pending = self.capture.as_mut()?;
        pending.remaining = pending.remaining.saturating_sub(1);
        if pending.remaining == 0 {
            let format = pending.format;
            self.capture = None;
            Some(format)
        } else {
            None
        }
    }

    /// Step one frame.
    ///
    /// Deforms the mesh with the cursor's motion since the previous frame, updates particles,
    /// snapshots the frame with colors at the current clock, then advances the clock. `dt` only
    /// moves the particle regeneration timeline.
    pub fn advance(&mut self, dt: Duration, cursor: Point) -> RenderFrame {
        let prev = self.prev_cursor.unwrap_or(cursor);
        self.prev_cursor = Some(cursor);
        self.elapsed = self.elapsed.saturating_add(dt);

        let params = DeformParams {
            mouse_trail_radius: self.config.mouse_trail_radius(),
            stretch_intensity: self.config.stretch_intensity(),
            shrink_intensity: self.config.shrink_intensity(),
        };
        deform_step(&mut self.mesh, cursor, prev, &params);

        let now_ms = self.elapsed.as_secs_f64() * 1000.0;
        self.particles.update(
            self.mesh.current(),
            cursor,
            now_ms,
            self.config.particle_intensity(),
            self.config.effective_particle_colors(),
        );

        let cursor_hidden = self.capture.is_some();
        let capture = self.tick_capture();

        let frame = RenderFrame {
            index: self.frame,
            canvas: self.canvas,
            background: self.config.effective_background(),
            stroke_width: self.config.stroke_weight(),
            clock: self.clock,
            strokes: mesh_strokes(
                &self.mesh,
                self.canvas.center(),
                self.clock,
                self.config.selected_colors(),
            ),
            static_particles: self.particles.statics().to_vec(),
            fading_particles: self.particles.fading().to_vec(),
            cursor,
            cursor_hidden,
            capture,
        };

        self.clock += CLOCK_STEP * self.config.color_animation_speed();
        self.frame = self.frame.next();
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/state.rs"]
mod tests;
