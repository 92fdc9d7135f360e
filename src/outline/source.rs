use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    foundation::error::{GlyphwarpError, GlyphwarpResult},
    outline::{segment::OutlineSegment, svg::parse_outline_svg},
};

/// Provider of glyph outlines keyed by a single-character letter.
pub trait OutlineSource {
    /// Load the outline for `letter` as straight segments in source units.
    fn load(&self, letter: &str) -> GlyphwarpResult<Vec<OutlineSegment>>;
}

/// Reads `<root>/<letter>.svg`.
#[derive(Clone, Debug)]
pub struct DirOutlineSource {
    root: PathBuf,
}

impl DirOutlineSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, letter: &str) -> GlyphwarpResult<PathBuf> {
        let key = normalize_letter(letter)?;
        Ok(self.root.join(format!("{key}.svg")))
    }
}

impl OutlineSource for DirOutlineSource {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, letter: &str) -> GlyphwarpResult<Vec<OutlineSegment>> {
        let path = self.path_for(letter)?;
        let bytes = std::fs::read(&path).map_err(|e| {
            GlyphwarpError::outline(format!("failed to read outline '{}': {e}", path.display()))
        })?;
        let segments = parse_outline_svg(&bytes)?;
        tracing::debug!(segments = segments.len(), "loaded outline");
        Ok(segments)
    }
}

/// Outlines held in memory, mostly for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct InMemoryOutlineSource {
    outlines: BTreeMap<String, Vec<OutlineSegment>>,
}

impl InMemoryOutlineSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, letter: &str, segments: Vec<OutlineSegment>) -> Self {
        self.insert(letter, segments);
        self
    }

    pub fn insert(&mut self, letter: &str, segments: Vec<OutlineSegment>) {
        self.outlines.insert(letter.to_lowercase(), segments);
    }
}

impl OutlineSource for InMemoryOutlineSource {
    fn load(&self, letter: &str) -> GlyphwarpResult<Vec<OutlineSegment>> {
        let key = normalize_letter(letter)?;
        self.outlines
            .get(&key)
            .cloned()
            .ok_or_else(|| GlyphwarpError::outline(format!("no outline for letter '{key}'")))
    }
}

/// Lowercase single-character key; rejects anything that could escape the outline directory.
pub fn normalize_letter(letter: &str) -> GlyphwarpResult<String> {
    let mut chars = letter.trim().chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(GlyphwarpError::validation(format!(
            "letter must be exactly one character, got \"{letter}\""
        )));
    };
    if !c.is_alphanumeric() {
        return Err(GlyphwarpError::validation(format!(
            "letter must be alphanumeric, got '{c}'"
        )));
    }
    Ok(c.to_lowercase().collect())
}

#[cfg(test)]
#[path = "../../tests/unit/outline/source.rs"]
mod tests;
