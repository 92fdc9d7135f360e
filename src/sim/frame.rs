use kurbo::Point;

use crate::{
    foundation::core::{Canvas, FrameIndex, Rgba8},
    mesh::builder::Mesh,
    paint::{palette::ColorSelection, radial::radial_color},
    particles::particle::{FadingParticle, StaticParticle},
};

/// Still-image formats a deferred capture can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureFormat {
    Png,
    Svg,
}

impl CaptureFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// One drawn piece of the letterform: consecutive mesh points of the same run, colored by the
/// point it ends at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    pub color: Rgba8,
}

/// Everything needed to draw or export one frame.
#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub index: FrameIndex,
    pub canvas: Canvas,
    pub background: Rgba8,
    pub stroke_width: f64,
    /// Animation clock the stroke colors were resolved with.
    pub clock: f64,
    /// In rendering order.
    pub strokes: Vec<StrokeSegment>,
    pub static_particles: Vec<StaticParticle>,
    pub fading_particles: Vec<FadingParticle>,
    pub cursor: Point,
    /// Set while a capture countdown is running.
    pub cursor_hidden: bool,
    /// Set on the frame a deferred capture is due.
    pub capture: Option<CaptureFormat>,
}

/// Resolve the stroke segments of `mesh` at `clock`.
pub fn mesh_strokes(
    mesh: &Mesh,
    center: Point,
    clock: f64,
    colors: &ColorSelection,
) -> Vec<StrokeSegment> {
    let pts = mesh.current();
    let mut out = Vec::with_capacity(pts.len().saturating_sub(mesh.runs().len()));
    for run in mesh.runs() {
        for k in run.range().skip(1) {
            let to = pts[k];
            out.push(StrokeSegment {
                from: pts[k - 1],
                to,
                color: radial_color(to, center, clock, colors),
            });
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sim/frame.rs"]
mod tests;
