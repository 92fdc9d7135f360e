use anyhow::Context as _;
use kurbo::{Affine, BezPath, PathEl, Point};

use crate::{
    foundation::error::{GlyphwarpError, GlyphwarpResult},
    outline::segment::OutlineSegment,
};

/// Tolerance (in source units) used when flattening curved path elements into lines.
const FLATTEN_TOLERANCE: f64 = 0.25;

/// Extract every straight segment of an outline SVG, in document order.
///
/// Each `usvg` path contributes its line segments with the absolute transform applied. Curves are
/// flattened and closing a subpath contributes the closing segment.
pub fn parse_outline_svg(bytes: &[u8]) -> GlyphwarpResult<Vec<OutlineSegment>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse outline svg tree")?;

    let mut out = Vec::new();
    collect_group(tree.root(), &mut out);

    if out.is_empty() {
        return Err(GlyphwarpError::outline(
            "outline svg contains no line segments",
        ));
    }
    Ok(out)
}

fn collect_group(group: &usvg::Group, out: &mut Vec<OutlineSegment>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_group(g.as_ref(), out),
            usvg::Node::Path(p) => collect_path(p.as_ref(), out),
            _ => {}
        }
    }
}

fn collect_path(path: &usvg::Path, out: &mut Vec<OutlineSegment>) {
    use usvg::tiny_skia_path::PathSegment;

    fn pt(p: usvg::tiny_skia_path::Point) -> Point {
        Point::new(f64::from(p.x), f64::from(p.y))
    }

    let mut bez = BezPath::new();
    for seg in path.data().segments() {
        match seg {
            PathSegment::MoveTo(p) => bez.move_to(pt(p)),
            PathSegment::LineTo(p) => bez.line_to(pt(p)),
            PathSegment::QuadTo(p1, p2) => bez.quad_to(pt(p1), pt(p2)),
            PathSegment::CubicTo(p1, p2, p3) => bez.curve_to(pt(p1), pt(p2), pt(p3)),
            PathSegment::Close => bez.close_path(),
        }
    }

    let t = path.abs_transform();
    bez.apply_affine(Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ]));

    let mut subpath_start = Point::ZERO;
    let mut cursor = Point::ZERO;
    kurbo::flatten(&bez, FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            subpath_start = p;
            cursor = p;
        }
        PathEl::LineTo(p) => {
            push_segment(out, cursor, p);
            cursor = p;
        }
        PathEl::ClosePath => {
            if cursor != subpath_start {
                push_segment(out, cursor, subpath_start);
            }
            cursor = subpath_start;
        }
        // `flatten` only emits moves, lines and closes.
        PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
            push_segment(out, cursor, p);
            cursor = p;
        }
    });
}

fn push_segment(out: &mut Vec<OutlineSegment>, a: Point, b: Point) {
    let seg = OutlineSegment::from_points(a, b);
    if seg.is_finite() {
        out.push(seg);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/svg.rs"]
mod tests;
