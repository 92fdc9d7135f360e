use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{GlyphwarpError, GlyphwarpResult},
    },
    mesh::builder::FONT_SIZE,
    outline::source::normalize_letter,
    paint::palette::ColorSelection,
};

/// Background used by the dark theme (`#0f0f0f`).
pub const DARK_BACKGROUND: Rgba8 = Rgba8::gray(15);
/// Background used by the light theme (`#fafafa`).
pub const LIGHT_BACKGROUND: Rgba8 = Rgba8::gray(250);

/// Color animation mode. Only the radial rings exist; other names are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorMode {
    #[default]
    Radial,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radial => "radial",
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = GlyphwarpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => Ok(Self::Radial),
            other => Err(GlyphwarpError::validation(format!(
                "color animation mode '{other}' is not implemented (only 'radial' is)"
            ))),
        }
    }
}

impl From<ColorMode> for String {
    fn from(m: ColorMode) -> Self {
        m.as_str().to_owned()
    }
}

/// The persisted light/dark preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn background(self) -> Rgba8 {
        match self {
            Self::Dark => DARK_BACKGROUND,
            Self::Light => LIGHT_BACKGROUND,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Everything the frame step reads. Mutated only through validated setters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    letter: String,
    font_size: f64,
    mouse_trail_radius: f64,
    stretch_intensity: f64,
    shrink_intensity: f64,
    stroke_weight: f64,
    selected_colors: ColorSelection,
    color_animation_mode: ColorMode,
    color_animation_speed: f64,
    particle_intensity: f64,
    particle_selected_colors: ColorSelection,
    background_color: Rgba8,
    theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letter: "a".to_owned(),
            font_size: FONT_SIZE,
            mouse_trail_radius: 80.0,
            stretch_intensity: 1.0,
            shrink_intensity: 0.0,
            stroke_weight: 10.0,
            selected_colors: ColorSelection(vec![0]),
            color_animation_mode: ColorMode::Radial,
            color_animation_speed: 0.07,
            particle_intensity: 0.0,
            particle_selected_colors: ColorSelection(vec![3]),
            background_color: DARK_BACKGROUND,
            theme: Theme::Dark,
        }
    }
}

fn check(cond: bool, msg: &str) -> GlyphwarpResult<()> {
    if cond {
        Ok(())
    } else {
        Err(GlyphwarpError::validation(msg))
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

impl Config {
    pub fn from_json_str(s: &str) -> GlyphwarpResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| GlyphwarpError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> GlyphwarpResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check every invariant; deserialized configs must pass this before use.
    pub fn validate(&self) -> GlyphwarpResult<()> {
        normalize_letter(&self.letter)?;
        check(positive(self.font_size), "fontSize must be > 0")?;
        check(
            positive(self.mouse_trail_radius),
            "mouseTrailRadius must be > 0",
        )?;
        check(
            non_negative(self.stretch_intensity),
            "stretchIntensity must be >= 0",
        )?;
        check(
            non_negative(self.shrink_intensity),
            "shrinkIntensity must be >= 0",
        )?;
        check(positive(self.stroke_weight), "strokeWeight must be > 0")?;
        check(
            !self.selected_colors.is_empty(),
            "selectedColors must not be empty",
        )?;
        check(
            non_negative(self.color_animation_speed),
            "colorAnimationSpeed must be >= 0",
        )?;
        check(
            non_negative(self.particle_intensity),
            "particleIntensity must be >= 0",
        )?;
        Ok(())
    }

    /// Restore every option to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn mouse_trail_radius(&self) -> f64 {
        self.mouse_trail_radius
    }

    pub fn stretch_intensity(&self) -> f64 {
        self.stretch_intensity
    }

    pub fn shrink_intensity(&self) -> f64 {
        self.shrink_intensity
    }

    pub fn stroke_weight(&self) -> f64 {
        self.stroke_weight
    }

    pub fn selected_colors(&self) -> &ColorSelection {
        &self.selected_colors
    }

    pub fn num_colors(&self) -> usize {
        self.selected_colors.len()
    }

    pub fn color_animation_mode(&self) -> ColorMode {
        self.color_animation_mode
    }

    pub fn color_animation_speed(&self) -> f64 {
        self.color_animation_speed
    }

    pub fn particle_intensity(&self) -> f64 {
        self.particle_intensity
    }

    pub fn particle_selected_colors(&self) -> &ColorSelection {
        &self.particle_selected_colors
    }

    /// Particle colors, falling back to the stroke colors when none are selected.
    pub fn effective_particle_colors(&self) -> &ColorSelection {
        if self.particle_selected_colors.is_empty() {
            &self.selected_colors
        } else {
            &self.particle_selected_colors
        }
    }

    pub fn background_color(&self) -> Rgba8 {
        self.background_color
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The configured background, unless it is one of the theme defaults, in which case the
    /// current theme decides.
    pub fn effective_background(&self) -> Rgba8 {
        if self.background_color == DARK_BACKGROUND || self.background_color == LIGHT_BACKGROUND {
            self.theme.background()
        } else {
            self.background_color
        }
    }

    pub fn set_letter(&mut self, letter: &str) -> GlyphwarpResult<()> {
        let trimmed = letter.trim();
        self.letter = if trimmed.is_empty() {
            "a".to_owned()
        } else {
            normalize_letter(trimmed)?
        };
        Ok(())
    }

    pub fn set_mouse_trail_radius(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(positive(v), "mouseTrailRadius must be > 0")?;
        self.mouse_trail_radius = v;
        Ok(())
    }

    pub fn set_stretch_intensity(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(non_negative(v), "stretchIntensity must be >= 0")?;
        self.stretch_intensity = v;
        Ok(())
    }

    pub fn set_shrink_intensity(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(non_negative(v), "shrinkIntensity must be >= 0")?;
        self.shrink_intensity = v;
        Ok(())
    }

    pub fn set_stroke_weight(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(positive(v), "strokeWeight must be > 0")?;
        self.stroke_weight = v;
        Ok(())
    }

    pub fn set_selected_colors(&mut self, colors: ColorSelection) -> GlyphwarpResult<()> {
        check(!colors.is_empty(), "selectedColors must not be empty")?;
        self.selected_colors = colors;
        Ok(())
    }

    pub fn set_color_animation_mode(&mut self, mode: &str) -> GlyphwarpResult<()> {
        self.color_animation_mode = ColorMode::try_from(mode.to_owned())?;
        Ok(())
    }

    pub fn set_color_animation_speed(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(non_negative(v), "colorAnimationSpeed must be >= 0")?;
        self.color_animation_speed = v;
        Ok(())
    }

    pub(crate) fn set_particle_intensity(&mut self, v: f64) -> GlyphwarpResult<()> {
        check(non_negative(v), "particleIntensity must be >= 0")?;
        self.particle_intensity = v;
        Ok(())
    }

    pub(crate) fn set_particle_selected_colors(&mut self, colors: ColorSelection) {
        self.particle_selected_colors = colors;
    }

    pub fn set_background_color(&mut self, hex: &str) -> GlyphwarpResult<()> {
        self.background_color = Rgba8::from_hex(hex)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/config.rs"]
mod tests;
