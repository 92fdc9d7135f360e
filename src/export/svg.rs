use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    export::ensure_parent_dir,
    foundation::{core::Rgba8, error::GlyphwarpResult},
    particles::particle::FadingParticle,
    sim::frame::RenderFrame,
};

const SHADOW_OFFSET: f64 = 2.0;
const STATIC_SHADOW_ALPHA: u8 = 40;

/// Vector snapshot of `frame`: background rect, one `<line>` per stroke segment, then particles
/// as circles in the same order the raster backend draws them.
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let w = frame.canvas.width;
    let h = frame.canvas.height;
    let mut out = String::with_capacity(256 + frame.strokes.len() * 160);

    // `write!` into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
    );
    let _ = writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{w}" height="{h}" fill="{}"{}/>"#,
        hex_rgb(frame.background),
        opacity_attr(frame.background.a)
    );

    for s in &frame.strokes {
        let _ = writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            s.from.x,
            s.from.y,
            s.to.x,
            s.to.y,
            hex_rgb(s.color),
            frame.stroke_width
        );
    }

    for p in &frame.static_particles {
        circle(
            &mut out,
            p.pos.x + SHADOW_OFFSET,
            p.pos.y + SHADOW_OFFSET,
            p.size,
            Rgba8::BLACK.with_alpha(STATIC_SHADOW_ALPHA),
        );
        circle(&mut out, p.pos.x, p.pos.y, p.size, p.color.with_alpha(255));
    }
    for p in frame.fading_particles.iter().filter(|p| p.is_alive()) {
        fading(&mut out, p);
    }

    out.push_str("</svg>");
    out
}

fn fading(out: &mut String, p: &FadingParticle) {
    circle(
        out,
        p.pos.x + SHADOW_OFFSET,
        p.pos.y + SHADOW_OFFSET,
        p.size,
        Rgba8::BLACK.with_alpha(p.shadow_alpha()),
    );
    circle(out, p.pos.x, p.pos.y, p.size, p.color.with_alpha(p.alpha()));
}

fn circle(out: &mut String, cx: f64, cy: f64, r: f64, color: Rgba8) {
    if color.a == 0 {
        return;
    }
    let _ = writeln!(
        out,
        r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"{}/>"#,
        hex_rgb(color),
        opacity_attr(color.a)
    );
}

fn hex_rgb(c: Rgba8) -> String {
    c.with_alpha(255).to_hex()
}

fn opacity_attr(a: u8) -> String {
    if a == 255 {
        String::new()
    } else {
        format!(r#" fill-opacity="{:.3}""#, f64::from(a) / 255.0)
    }
}

/// Write [`frame_to_svg`] to `path`, creating parent directories.
#[tracing::instrument(skip(frame), fields(path = %path.display()))]
pub fn write_svg(path: &Path, frame: &RenderFrame) -> GlyphwarpResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, frame_to_svg(frame))
        .with_context(|| format!("write svg '{}'", path.display()))?;
    tracing::debug!(lines = frame.strokes.len(), "wrote svg");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
