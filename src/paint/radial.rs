use kurbo::Point;

use crate::{
    foundation::core::Rgba8,
    paint::palette::{ColorSelection, DEFAULT_COLOR},
};

/// Width of one color ring, in canvas pixels.
pub const RING_WIDTH: f64 = 50.0;

/// Ring offset (in pixels) per unit of animation clock.
pub const CLOCK_TO_PIXELS: f64 = 100.0;

/// Concentric-ring color for a point: rings of [`RING_WIDTH`] around `center` cycle through the
/// selected colors and drift outward as `clock` grows.
///
/// Pure: live rendering and exports call this with the same inputs and get the same color.
pub fn radial_color(point: Point, center: Point, clock: f64, selection: &ColorSelection) -> Rgba8 {
    if selection.is_empty() {
        return DEFAULT_COLOR;
    }

    let dist = (point - center).hypot();
    let ring = ((dist + clock * CLOCK_TO_PIXELS) / RING_WIDTH).floor();
    let n = selection.len() as f64;
    let slot = ring.rem_euclid(n);
    if !slot.is_finite() {
        return DEFAULT_COLOR;
    }
    selection.color_at(slot as usize).unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/radial.rs"]
mod tests;
