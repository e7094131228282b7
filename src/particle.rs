//! The particle entity.

use glam::Vec2;

/// A single animated point in the field.
///
/// Positions are in surface pixels, velocities in pixels per frame. The
/// radius and color are fixed for one lifetime; aging only changes how the
/// particle is drawn (see [`Particle::life_ratio`]). Velocity changes only
/// by sign flip when the particle reflects off a surface edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Center position in surface pixels.
    pub position: Vec2,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Base draw radius in pixels.
    pub radius: f32,
    /// RGB color sampled from the active palette at spawn.
    pub color: [f32; 3],
    /// Frames lived since spawn or respawn.
    pub age: u32,
    /// Frames this particle gets before it is respawned in place.
    pub lifespan: u32,
}

impl Particle {
    /// Remaining-life fraction in `[0, 1]`.
    ///
    /// Drives both the drawn radius and the drawn alpha. Monotonically
    /// non-increasing over a lifetime, exactly 0 at `age == lifespan`.
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        (1.0 - self.age as f32 / self.lifespan as f32).max(0.0)
    }

    /// Whether this particle has used up its lifespan.
    #[inline]
    pub fn expired(&self) -> bool {
        self.age >= self.lifespan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(age: u32, lifespan: u32) -> Particle {
        Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: 3.0,
            color: [1.0, 1.0, 1.0],
            age,
            lifespan,
        }
    }

    #[test]
    fn test_life_ratio_fresh() {
        assert_eq!(particle(0, 300).life_ratio(), 1.0);
    }

    #[test]
    fn test_life_ratio_zero_at_lifespan() {
        assert_eq!(particle(300, 300).life_ratio(), 0.0);
        assert_eq!(particle(301, 300).life_ratio(), 0.0);
    }

    #[test]
    fn test_life_ratio_monotonic() {
        let mut last = f32::INFINITY;
        for age in 0..=400 {
            let ratio = particle(age, 400).life_ratio();
            assert!(ratio <= last);
            assert!((0.0..=1.0).contains(&ratio));
            last = ratio;
        }
    }

    #[test]
    fn test_expired() {
        assert!(!particle(299, 300).expired());
        assert!(particle(300, 300).expired());
    }
}
