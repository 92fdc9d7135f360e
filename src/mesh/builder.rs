use kurbo::Point;

use crate::{
    foundation::{
        core::Canvas,
        error::{GlyphwarpError, GlyphwarpResult},
    },
    outline::segment::{OutlineBounds, OutlineSegment},
};

/// Arc-length spacing between consecutive sample points, in source units.
pub const SAMPLE_SPACING: f64 = 5.0;

/// Height (in canvas pixels) the outline's source-space height is scaled to.
pub const FONT_SIZE: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshParams {
    pub sample_spacing: f64,
    pub font_size: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            sample_spacing: SAMPLE_SPACING,
            font_size: FONT_SIZE,
        }
    }
}

/// Contiguous block of points sampled from one outline segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentRun {
    pub start: usize,
    pub len: usize,
}

impl SegmentRun {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Deformable point mesh sampled from an outline.
///
/// `current` and `rest` always have the same length and index `i` of both refers to the same
/// sampled location. `runs` tile `0..len()` in outline order.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub(crate) current: Vec<Point>,
    pub(crate) rest: Vec<Point>,
    pub(crate) runs: Vec<SegmentRun>,
}

impl Mesh {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn current(&self) -> &[Point] {
        &self.current
    }

    pub fn rest(&self) -> &[Point] {
        &self.rest
    }

    pub fn runs(&self) -> &[SegmentRun] {
        &self.runs
    }

    /// Snap every point back to its rest position.
    pub fn reset_to_rest(&mut self) {
        self.current.clone_from(&self.rest);
    }
}

/// Number of interpolation steps for a segment; a segment yields `steps + 1` points.
pub fn segment_steps(segment: &OutlineSegment, sample_spacing: f64) -> usize {
    (segment.length() / sample_spacing).ceil() as usize
}

/// Sample `segments` at uniform arc length and map them onto `canvas`.
///
/// The outline is centered on the canvas midpoint and uniformly scaled so that its source height
/// maps to `params.font_size`.
#[tracing::instrument(skip(segments), fields(segments = segments.len()))]
pub fn build_mesh(
    segments: &[OutlineSegment],
    canvas: Canvas,
    params: MeshParams,
) -> GlyphwarpResult<Mesh> {
    if !(params.sample_spacing > 0.0) {
        return Err(GlyphwarpError::validation("sample spacing must be > 0"));
    }
    if !(params.font_size > 0.0) {
        return Err(GlyphwarpError::validation("font size must be > 0"));
    }
    if let Some(bad) = segments.iter().position(|s| !s.is_finite()) {
        return Err(GlyphwarpError::outline(format!(
            "outline segment {bad} has non-finite coordinates"
        )));
    }

    let Some(bounds) = OutlineBounds::of(segments) else {
        return Ok(Mesh::empty());
    };
    if !(bounds.h > 0.0) {
        return Err(GlyphwarpError::outline(
            "outline has zero height and cannot be scaled",
        ));
    }

    let scale = params.font_size / bounds.h;
    let canvas_center = canvas.center();
    let source_center = bounds.center();
    let to_canvas = |p: Point| canvas_center + (p - source_center) * scale;

    let mut points = Vec::new();
    let mut runs = Vec::with_capacity(segments.len());
    for seg in segments {
        let steps = segment_steps(seg, params.sample_spacing);
        let start = points.len();
        for i in 0..=steps {
            let t = if steps > 0 {
                i as f64 / steps as f64
            } else {
                0.0
            };
            points.push(to_canvas(seg.lerp(t)));
        }
        runs.push(SegmentRun {
            start,
            len: steps + 1,
        });
    }

    tracing::debug!(points = points.len(), scale, "built mesh");
    Ok(Mesh {
        rest: points.clone(),
        current: points,
        runs,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/builder.rs"]
mod tests;
