use kurbo::Point;

use crate::{foundation::math::normalize_or_zero, mesh::builder::Mesh};

/// Fraction of the remaining distance to rest recovered every frame.
pub const RETURN_FORCE: f64 = 0.12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeformParams {
    pub mouse_trail_radius: f64,
    pub stretch_intensity: f64,
    pub shrink_intensity: f64,
}

/// Proximity weight in `[0, 1]`: 1 at the cursor, 0 at and beyond `radius`.
pub fn influence(dist_to_cursor: f64, radius: f64) -> f64 {
    (1.0 - dist_to_cursor / radius).max(0.0)
}

/// Advance every mesh point by one frame.
///
/// Points near the cursor are pushed along the cursor's motion (stretch) and optionally pulled
/// toward it (shrink), both scaled by influence and cursor speed; afterwards every point relaxes
/// toward its rest position by [`RETURN_FORCE`].
pub fn deform_step(mesh: &mut Mesh, cursor: Point, prev_cursor: Point, params: &DeformParams) {
    let velocity = cursor - prev_cursor;
    let speed = velocity.hypot();
    let move_dir = normalize_or_zero(velocity);

    for (pos, rest) in mesh.current.iter_mut().zip(mesh.rest.iter()) {
        let to_cursor = cursor - *pos;
        let w = influence(to_cursor.hypot(), params.mouse_trail_radius);

        if w > 0.0 {
            *pos += move_dir * (w * params.stretch_intensity * speed);

            if params.shrink_intensity > 0.0 {
                *pos += normalize_or_zero(to_cursor) * (w * params.shrink_intensity * speed);
            }
        }

        *pos += (*rest - *pos) * RETURN_FORCE;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/deform.rs"]
mod tests;
