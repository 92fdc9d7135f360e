use std::f64::consts::TAU;

use kurbo::Point;
use rand::{Rng as _, SeedableRng as _, rngs::SmallRng};

use crate::{
    foundation::core::Rgba8,
    paint::palette::{ColorSelection, DEFAULT_COLOR},
    particles::particle::{FadingParticle, StaticParticle},
};

/// Static particles generated per unit of particle intensity.
pub const PARTICLES_PER_INTENSITY: f64 = 35.0;

/// Cursor distance below which a static particle pops.
pub const DETECTION_RADIUS: f64 = 35.0;

/// Quiet period after both pools drain before static particles come back.
pub const REGENERATION_DELAY_MS: f64 = 2000.0;

const OFFSET_MIN: f64 = 3.0;
const OFFSET_MAX: f64 = 20.0;
const SIZE_MIN: f64 = 5.0;
const SIZE_MAX: f64 = 15.0;

/// Static and fading particle pools plus the regeneration debounce.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    statics: Vec<StaticParticle>,
    fading: Vec<FadingParticle>,
    /// Timeline position (ms) at which both pools last became empty.
    drained_at_ms: Option<f64>,
    rng: SmallRng,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            statics: Vec::new(),
            fading: Vec::new(),
            drained_at_ms: None,
            rng,
        }
    }

    pub fn statics(&self) -> &[StaticParticle] {
        &self.statics
    }

    pub fn fading(&self) -> &[FadingParticle] {
        &self.fading
    }

    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.fading.is_empty()
    }

    /// Empty both pools. The debounce is left as is.
    pub fn clear(&mut self) {
        self.statics.clear();
        self.fading.clear();
    }

    /// Make static particles eligible to regenerate on the next update.
    pub fn rollback_debounce(&mut self) {
        self.drained_at_ms = None;
    }

    fn regeneration_due(&self, now_ms: f64) -> bool {
        match self.drained_at_ms {
            None => true,
            Some(t) => now_ms - t >= REGENERATION_DELAY_MS,
        }
    }

    /// Replace the static pool with `floor(intensity * 35)` particles scattered around random
    /// anchors. Returns the number generated (zero when there are no anchors).
    pub fn generate(
        &mut self,
        anchors: &[Point],
        intensity: f64,
        colors: &ColorSelection,
    ) -> usize {
        self.statics.clear();
        if anchors.is_empty() || !(intensity > 0.0) {
            return 0;
        }

        let count = (intensity * PARTICLES_PER_INTENSITY).floor() as usize;
        self.statics.reserve(count);
        for _ in 0..count {
            let anchor = anchors[self.rng.gen_range(0..anchors.len())];
            let size = self.rng.gen_range(SIZE_MIN..SIZE_MAX);
            let color = self.pick_color(colors);
            let angle = self.rng.gen_range(0.0..TAU);
            let dist = self.rng.gen_range(OFFSET_MIN..OFFSET_MAX);
            self.statics.push(StaticParticle {
                pos: anchor + kurbo::Vec2::from_angle(angle) * dist,
                size,
                color,
            });
        }

        tracing::debug!(count, "generated static particles");
        count
    }

    fn pick_color(&mut self, colors: &ColorSelection) -> Rgba8 {
        if colors.is_empty() {
            return DEFAULT_COLOR;
        }
        let slot = self.rng.gen_range(0..colors.len());
        colors.color_at(slot).unwrap_or(DEFAULT_COLOR)
    }

    /// One frame of particle life.
    ///
    /// With `intensity <= 0` both pools are cleared. Otherwise static particles regenerate when
    /// both pools are empty and the debounce has elapsed, particles within
    /// [`DETECTION_RADIUS`] of the cursor pop into fading particles, and fading particles advance
    /// and are pruned once their life runs out.
    pub fn update(
        &mut self,
        anchors: &[Point],
        cursor: Point,
        now_ms: f64,
        intensity: f64,
        colors: &ColorSelection,
    ) {
        if !(intensity > 0.0) {
            self.clear();
            return;
        }

        if self.is_empty() && self.regeneration_due(now_ms) {
            self.generate(anchors, intensity, colors);
        }
        let was_populated = !self.is_empty();

        let (popped, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.statics)
            .into_iter()
            .partition(|p| (p.pos - cursor).hypot() < DETECTION_RADIUS);
        self.statics = kept;
        self.fading.extend(popped.iter().map(FadingParticle::popped));

        for p in &mut self.fading {
            p.advance();
        }
        self.fading.retain(FadingParticle::is_alive);

        if was_populated && self.is_empty() {
            self.drained_at_ms = Some(now_ms);
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/system.rs"]
mod tests;
