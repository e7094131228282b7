//! Spawn context for particle creation and respawn.
//!
//! One [`SpawnContext`] is owned by the field and used for both the initial
//! population fill and every in-place respawn, so a seeded context replays
//! the exact same spawn sequence (see `Background::with_seed`).

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::lifecycle::Lifecycle;
use crate::particle::Particle;
use crate::visuals::Palette;

/// Velocity components are sampled from `[-DRIFT_HALF_SPAN, DRIFT_HALF_SPAN)`
/// pixels per frame.
pub const DRIFT_HALF_SPAN: f32 = 0.25;

/// Base draw radius is sampled from `[MIN_RADIUS, MAX_RADIUS)` pixels.
pub const MIN_RADIUS: f32 = 2.0;
/// See [`MIN_RADIUS`].
pub const MAX_RADIUS: f32 = 5.0;

/// Sampling state for particle creation.
///
/// # Example
///
/// ```
/// use plexfield::{Lifecycle, Palette, SpawnContext, Vec2};
///
/// let mut ctx = SpawnContext::seeded(7);
/// let p = ctx.particle(Vec2::new(800.0, 600.0), &Lifecycle::default(), Palette::Indigo);
/// assert_eq!(p.age, 0);
/// ```
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Deterministic context; the same seed yields the same spawn sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Context seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random u32 in `[min, max)`.
    #[inline]
    pub fn random_uint(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..max)
    }

    /// Uniform point inside the rectangle `[0, extent.x) x [0, extent.y)`.
    pub fn random_in_rect(&mut self, extent: Vec2) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..extent.x),
            self.rng.gen_range(0.0..extent.y),
        )
    }

    /// Velocity with both components uniform in `[-half_span, half_span)`.
    pub fn drift_velocity(&mut self, half_span: f32) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-half_span..half_span),
            self.rng.gen_range(-half_span..half_span),
        )
    }

    /// Sample a fresh particle for a surface of the given extent.
    ///
    /// Used verbatim for the initial fill and for every in-place respawn:
    /// uniform position, drift velocity, radius in `[2, 5)`, a palette color,
    /// a lifespan from the lifecycle's range, age 0.
    pub fn particle(&mut self, extent: Vec2, lifecycle: &Lifecycle, palette: Palette) -> Particle {
        let colors = palette.colors();
        let color = colors[self.rng.gen_range(0..colors.len())];
        let (lo, hi) = lifecycle.lifespan_bounds();

        Particle {
            position: self.random_in_rect(extent),
            velocity: self.drift_velocity(DRIFT_HALF_SPAN),
            radius: self.random_range(MIN_RADIUS, MAX_RADIUS),
            color,
            age: 0,
            lifespan: self.random_uint(lo, hi),
        }
    }
}
