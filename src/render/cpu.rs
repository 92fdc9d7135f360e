use kurbo::{Cap, Circle, Join, Line, PathEl, Point, Shape as _, Stroke, StrokeOpts, Vec2};

use crate::{
    foundation::{
        core::Rgba8,
        error::{GlyphwarpError, GlyphwarpResult},
    },
    render::backend::FrameRGBA,
    sim::frame::RenderFrame,
};

const SHADOW_OFFSET: f64 = 2.0;
const STATIC_SHADOW_ALPHA: u8 = 40;
const TOLERANCE: f64 = 0.1;
const SHADOW: Vec2 = Vec2::new(SHADOW_OFFSET, SHADOW_OFFSET);

/// Rasterizes [`RenderFrame`]s with `vello_cpu`.
///
/// The render context is kept between calls and only rebuilt when the output size changes.
#[derive(Default)]
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl CpuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `frame` at `scale` times the canvas size.
    ///
    /// Order: background, stroke segments, static particles, fading particles. Each particle
    /// draws its shadow first.
    #[tracing::instrument(skip(self, frame), fields(frame = frame.index.0))]
    pub fn render(&mut self, frame: &RenderFrame, scale: f64) -> GlyphwarpResult<FrameRGBA> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(GlyphwarpError::render("scale must be finite and > 0"));
        }
        let width = scaled_dim(frame.canvas.width, scale)?;
        let height = scaled_dim(frame.canvas.height, scale)?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::scale(scale));
        set_color(&mut ctx, frame.background);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(frame.canvas.width),
            f64::from(frame.canvas.height),
        ));

        let style = Stroke::new(frame.stroke_width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        for seg in &frame.strokes {
            let outline = stroke_outline(Line::new(seg.from, seg.to), &style);
            set_color(&mut ctx, seg.color);
            ctx.fill_path(&outline);
        }

        for p in &frame.static_particles {
            fill_disc(
                &mut ctx,
                p.pos + SHADOW,
                p.size,
                Rgba8::BLACK.with_alpha(STATIC_SHADOW_ALPHA),
            );
            fill_disc(&mut ctx, p.pos, p.size, p.color.with_alpha(255));
        }
        for p in &frame.fading_particles {
            fill_disc(
                &mut ctx,
                p.pos + SHADOW,
                p.size,
                Rgba8::BLACK.with_alpha(p.shadow_alpha()),
            );
            fill_disc(&mut ctx, p.pos, p.size, p.color.with_alpha(p.alpha()));
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn scaled_dim(v: u32, scale: f64) -> GlyphwarpResult<u16> {
    let px = (f64::from(v) * scale).round();
    if px < 1.0 || px > f64::from(u16::MAX) {
        return Err(GlyphwarpError::render(format!(
            "output dimension {px} is out of range (1..={})",
            u16::MAX
        )));
    }
    Ok(px as u16)
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn to_cpu_path(elements: impl IntoIterator<Item = PathEl>) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in elements {
        p.push(el);
    }
    p
}

/// Filled outline of a stroked line.
fn stroke_outline(line: Line, style: &Stroke) -> vello_cpu::kurbo::BezPath {
    let outline = kurbo::stroke(
        line.path_elements(TOLERANCE),
        style,
        &StrokeOpts::default(),
        TOLERANCE,
    );
    to_cpu_path(outline.elements().iter().copied())
}

fn fill_disc(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, color: Rgba8) {
    if color.a == 0 || !(radius > 0.0) {
        return;
    }
    let p = to_cpu_path(Circle::new(center, radius).path_elements(TOLERANCE));
    set_color(ctx, color);
    ctx.fill_path(&p);
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
