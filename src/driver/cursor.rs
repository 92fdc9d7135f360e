use std::path::Path;

use anyhow::Context as _;
use kurbo::Point;

use crate::foundation::{
    core::Canvas,
    error::{GlyphwarpError, GlyphwarpResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorKey {
    pub frame: u64,
    pub x: f64,
    pub y: f64,
}

/// Keyframed cursor path. Positions are linearly interpolated between keys and held before the
/// first and after the last one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<CursorKey>", into = "Vec<CursorKey>")]
pub struct CursorScript {
    keys: Vec<CursorKey>,
}

impl CursorScript {
    /// Keys are sorted by frame; duplicate frames and non-finite coordinates are rejected.
    pub fn new(mut keys: Vec<CursorKey>) -> GlyphwarpResult<Self> {
        if keys.is_empty() {
            return Err(GlyphwarpError::validation(
                "cursor script needs at least one key",
            ));
        }
        if keys.iter().any(|k| !(k.x.is_finite() && k.y.is_finite())) {
            return Err(GlyphwarpError::validation(
                "cursor script coordinates must be finite",
            ));
        }
        keys.sort_by_key(|k| k.frame);
        if keys.windows(2).any(|w| w[0].frame == w[1].frame) {
            return Err(GlyphwarpError::validation(
                "cursor script has two keys on the same frame",
            ));
        }
        Ok(Self { keys })
    }

    /// Cursor parked at `p` forever.
    pub fn still(p: Point) -> Self {
        Self {
            keys: vec![CursorKey {
                frame: 0,
                x: p.x,
                y: p.y,
            }],
        }
    }

    /// Default path over `frames` frames: across the vertical middle of the canvas, then
    /// diagonally back through the center.
    pub fn sweep(canvas: Canvas, frames: u64) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let last = frames.max(4) - 1;
        let key = |frame: u64, x: f64, y: f64| CursorKey { frame, x, y };
        Self {
            keys: vec![
                key(0, w * 0.1, h * 0.5),
                key(last / 3, w * 0.9, h * 0.5),
                key(2 * last / 3, w * 0.3, h * 0.3),
                key(last, w * 0.7, h * 0.7),
            ],
        }
    }

    pub fn from_json_str(s: &str) -> GlyphwarpResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| GlyphwarpError::validation(format!("parse cursor script JSON: {e}")))
    }

    pub fn from_path(path: &Path) -> GlyphwarpResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read cursor script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn keys(&self) -> &[CursorKey] {
        &self.keys
    }

    pub fn at(&self, frame: u64) -> Point {
        let idx = self.keys.partition_point(|k| k.frame <= frame);
        let (a, b) = match (idx.checked_sub(1).map(|i| self.keys[i]), self.keys.get(idx)) {
            (Some(a), Some(b)) => (a, *b),
            (Some(a), None) => return Point::new(a.x, a.y),
            (None, Some(b)) => return Point::new(b.x, b.y),
            (None, None) => return Point::ZERO,
        };
        let t = (frame - a.frame) as f64 / (b.frame - a.frame) as f64;
        Point::new(a.x, a.y).lerp(Point::new(b.x, b.y), t)
    }
}

impl TryFrom<Vec<CursorKey>> for CursorScript {
    type Error = GlyphwarpError;

    fn try_from(keys: Vec<CursorKey>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<CursorScript> for Vec<CursorKey> {
    fn from(s: CursorScript) -> Self {
        s.keys
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/cursor.rs"]
mod tests;
