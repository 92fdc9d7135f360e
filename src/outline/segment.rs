use kurbo::Point;

/// One straight line of a glyph outline, in source (SVG) units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutlineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl OutlineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        (self.end() - self.start()).hypot()
    }

    pub fn lerp(&self, t: f64) -> Point {
        self.start().lerp(self.end(), t)
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }
}

/// Axis-aligned bounds over every segment endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineBounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl OutlineBounds {
    /// `None` for an empty outline.
    pub fn of(segments: &[OutlineSegment]) -> Option<Self> {
        let first = segments.first()?;
        let (mut min_x, mut max_x) = (first.x1, first.x1);
        let (mut min_y, mut max_y) = (first.y1, first.y1);
        for s in segments {
            min_x = min_x.min(s.x1).min(s.x2);
            max_x = max_x.max(s.x1).max(s.x2);
            min_y = min_y.min(s.y1).min(s.y2);
            max_y = max_y.max(s.y1).max(s.y2);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x,
            h: max_y - min_y,
        })
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/outline/segment.rs"]
mod tests;
