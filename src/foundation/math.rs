use kurbo::Vec2;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Unit vector along `v`, or `v` unchanged when it has zero length.
pub(crate) fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 0.0 { v / len } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
