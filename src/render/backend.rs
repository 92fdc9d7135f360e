use crate::foundation::{
    core::Rgba8,
    error::{GlyphwarpError, GlyphwarpResult},
    math::mul_div255_u16,
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::CpuRenderer`] are premultiplied; the flag makes that explicit
/// at sink and export boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        let mut out = [px[0], px[1], px[2], px[3]];
        if self.premultiplied {
            out = unpremul(out);
        }
        Some(out)
    }

    /// Opaque RGBA8 copy of the frame composited over `bg`.
    pub fn to_opaque_rgba8(&self, bg: Rgba8) -> GlyphwarpResult<Vec<u8>> {
        let mut out = vec![0u8; self.data.len()];
        if self.premultiplied {
            flatten_premul_over_bg(&mut out, &self.data, bg)?;
        } else {
            let straight = self.data.chunks_exact(4).flat_map(|px| {
                Rgba8 {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                    a: px[3],
                }
                .to_premul()
            });
            let premul: Vec<u8> = straight.collect();
            flatten_premul_over_bg(&mut out, &premul, bg)?;
        }
        Ok(out)
    }
}

/// Composite premultiplied `src` over an opaque `bg`, writing opaque RGBA8 into `dst`.
pub(crate) fn flatten_premul_over_bg(
    dst: &mut [u8],
    src_premul: &[u8],
    bg: Rgba8,
) -> GlyphwarpResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(GlyphwarpError::validation(
            "flatten_premul_over_bg expects equal-length rgba8 buffers",
        ));
    }

    let (bg_r, bg_g, bg_b) = (u16::from(bg.r), u16::from(bg.g), u16::from(bg.b));
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        d[0] = (u16::from(s[0]) + mul_div255_u16(bg_r, inv)).min(255) as u8;
        d[1] = (u16::from(s[1]) + mul_div255_u16(bg_g, inv)).min(255) as u8;
        d[2] = (u16::from(s[2]) + mul_div255_u16(bg_b, inv)).min(255) as u8;
        d[3] = 255;
    }
    Ok(())
}

fn unpremul(px: [u8; 4]) -> [u8; 4] {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
