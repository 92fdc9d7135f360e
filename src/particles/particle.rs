use kurbo::{Point, Vec2};

use crate::foundation::core::Rgba8;

/// Decorative particle resting near the letterform until the cursor touches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticParticle {
    pub pos: Point,
    pub size: f64,
    pub color: Rgba8,
}

/// Short-lived particle left behind when a static particle is popped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadingParticle {
    pub pos: Point,
    pub velocity: Vec2,
    pub size: f64,
    pub color: Rgba8,
    /// Remaining life in `(0, 1]`.
    pub life: f64,
    /// Lifetime in seconds at 60 frames per second.
    pub max_life: f64,
}

impl FadingParticle {
    pub const MAX_LIFE: f64 = 0.5;

    pub fn popped(from: &StaticParticle) -> Self {
        Self {
            pos: from.pos,
            velocity: Vec2::ZERO,
            size: from.size,
            color: from.color,
            life: 1.0,
            max_life: Self::MAX_LIFE,
        }
    }

    /// Move by velocity and burn one frame of life.
    pub fn advance(&mut self) {
        self.pos += self.velocity;
        self.life -= 1.0 / (60.0 * self.max_life);
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Disc alpha, proportional to remaining life.
    pub fn alpha(&self) -> u8 {
        (self.life.clamp(0.0, 1.0) * 255.0).floor() as u8
    }

    pub fn shadow_alpha(&self) -> u8 {
        (self.life.clamp(0.0, 1.0) * 40.0).floor() as u8
    }
}
