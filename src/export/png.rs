use std::path::Path;

use anyhow::Context as _;

use crate::{
    export::ensure_parent_dir,
    foundation::{core::Rgba8, error::GlyphwarpResult},
    render::{backend::FrameRGBA, cpu::CpuRenderer},
    sim::frame::RenderFrame,
};

/// Raster exports are rendered at three times the canvas size.
pub const PNG_EXPORT_SCALE: f64 = 3.0;

/// Flatten `frame` over the opaque version of `background` and write it as a PNG.
#[tracing::instrument(
    skip(frame),
    fields(path = %path.display(), w = frame.width, h = frame.height)
)]
pub fn write_png(path: &Path, frame: &FrameRGBA, background: Rgba8) -> GlyphwarpResult<()> {
    let pixels = frame.to_opaque_rgba8(background)?;
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &pixels,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Re-render `frame` at [`PNG_EXPORT_SCALE`] and write it to `path`.
pub fn export_png(
    renderer: &mut CpuRenderer,
    path: &Path,
    frame: &RenderFrame,
) -> GlyphwarpResult<FrameRGBA> {
    let image = renderer.render(frame, PNG_EXPORT_SCALE)?;
    write_png(path, &image, frame.background)?;
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
