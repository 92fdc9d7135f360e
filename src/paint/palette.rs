use crate::foundation::{
    core::Rgba8,
    error::{GlyphwarpError, GlyphwarpResult},
};

/// The fixed five-entry palette every color selection indexes into.
pub const PALETTE: [Rgba8; 5] = [
    Rgba8::opaque(0x00, 0x66, 0xFF), // electric blue
    Rgba8::opaque(0xFF, 0x00, 0x00), // red
    Rgba8::opaque(0x84, 0xE0, 0xFF), // turquoise
    Rgba8::opaque(0xFF, 0xD7, 0x00), // yellow
    Rgba8::opaque(0xFB, 0xA8, 0xED), // pink
];

/// Color returned when a selection resolves to nothing.
pub const DEFAULT_COLOR: Rgba8 = Rgba8::WHITE;

/// Ordered, duplicate-free subset of [`PALETTE`] indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ColorSelection(pub(crate) Vec<usize>);

impl ColorSelection {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> GlyphwarpResult<Self> {
        let mut out: Vec<usize> = Vec::new();
        for i in indices {
            if i >= PALETTE.len() {
                return Err(GlyphwarpError::validation(format!(
                    "color index {i} is out of range (palette has {} entries)",
                    PALETTE.len()
                )));
            }
            if !out.contains(&i) {
                out.push(i);
            }
        }
        Ok(Self(out))
    }

    pub fn single(index: usize) -> GlyphwarpResult<Self> {
        Self::new([index])
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Palette color of the `slot`-th selected entry.
    pub fn color_at(&self, slot: usize) -> Option<Rgba8> {
        self.0.get(slot).map(|&i| PALETTE[i])
    }
}

impl TryFrom<Vec<usize>> for ColorSelection {
    type Error = GlyphwarpError;

    fn try_from(v: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<ColorSelection> for Vec<usize> {
    fn from(s: ColorSelection) -> Self {
        s.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
