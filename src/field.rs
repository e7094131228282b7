//! The simulation core: a fixed arena of particles advanced one step per
//! rendered frame.
//!
//! A [`Field`] owns all particle state. It is pure CPU and fully
//! deterministic under a seeded [`SpawnContext`], which keeps every property
//! of the simulation testable without a window or a GPU. The presentation
//! layer only ever calls [`Field::step`] and the two instance-extraction
//! methods.
//!
//! Population is sized from the surface area at attach time —
//! `min(floor(width * height / 10_000), 100)` — and never changes
//! afterwards: expired particles are respawned in place, and resizes keep
//! the arena as-is.

use glam::Vec2;

use crate::gpu::links::LinkInstance;
use crate::gpu::DiscInstance;
use crate::lifecycle::Lifecycle;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use crate::visuals::VisualConfig;

/// Hard cap on the particle population.
pub const MAX_POPULATION: usize = 100;

/// Surface area (px²) budgeted per particle when sizing the population.
pub const AREA_PER_PARTICLE: f32 = 10_000.0;

/// Number of particles for a surface of the given extent.
pub fn population_for(extent: Vec2) -> usize {
    ((extent.x * extent.y / AREA_PER_PARTICLE) as usize).min(MAX_POPULATION)
}

/// Lifecycle state of a field.
///
/// `Stopped` is terminal: `step` and `resize` become no-ops and the arena is
/// frozen exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Built but not bound to a surface yet; the arena is empty.
    Detached,
    /// Bound to a surface and stepping.
    Running,
    /// Torn down.
    Stopped,
}

/// The particle-field simulation.
pub struct Field {
    particles: Vec<Particle>,
    extent: Vec2,
    state: FieldState,
    frame: u64,
    lifecycle: Lifecycle,
    visuals: VisualConfig,
    spawn: SpawnContext,
}

impl Field {
    /// Create a detached field with an empty arena.
    pub fn new(lifecycle: Lifecycle, visuals: VisualConfig, spawn: SpawnContext) -> Self {
        Self {
            particles: Vec::new(),
            extent: Vec2::ZERO,
            state: FieldState::Detached,
            frame: 0,
            lifecycle,
            visuals,
            spawn,
        }
    }

    /// Bind to a surface of the given extent and fill the arena.
    ///
    /// The population is computed here and stays fixed until the next
    /// `attach`. Re-attaching a running field refills the arena; a stopped
    /// field stays stopped.
    pub fn attach(&mut self, extent: Vec2) {
        if self.state == FieldState::Stopped {
            return;
        }

        self.extent = extent;
        let count = population_for(extent);
        self.particles.clear();
        self.particles.reserve_exact(count);
        for _ in 0..count {
            let p = self
                .spawn
                .particle(extent, &self.lifecycle, self.visuals.palette);
            self.particles.push(p);
        }
        self.state = FieldState::Running;
        log::debug!(
            "field attached: {}x{} px, {} particles",
            extent.x,
            extent.y,
            count
        );
    }

    /// Update the surface extent after a viewport resize.
    ///
    /// Only the extent changes: particles are neither repositioned nor
    /// recounted. A particle left outside a shrunk surface is clamped back
    /// by reflection on its next step.
    pub fn resize(&mut self, extent: Vec2) {
        if self.state != FieldState::Running {
            return;
        }
        self.extent = extent;
    }

    /// Advance the simulation by exactly one frame.
    ///
    /// Per particle, in slot order: integrate position, reflect off the
    /// surface edges per axis, age one frame, and respawn in place on
    /// expiry. The renderer never observes an expired particle.
    pub fn step(&mut self) {
        if self.state != FieldState::Running {
            return;
        }

        let extent = self.extent;
        for i in 0..self.particles.len() {
            {
                let p = &mut self.particles[i];
                p.position += p.velocity;
                reflect_axis(&mut p.position.x, &mut p.velocity.x, extent.x);
                reflect_axis(&mut p.position.y, &mut p.velocity.y, extent.y);
                p.age += 1;
            }
            if self.particles[i].expired() {
                self.respawn(i);
            }
        }
        self.frame += 1;
    }

    /// Replace the particle in `slot` with a freshly sampled one.
    fn respawn(&mut self, slot: usize) {
        let p = self
            .spawn
            .particle(self.extent, &self.lifecycle, self.visuals.palette);
        self.particles[slot] = p;
    }

    /// Tear the field down. Idempotent; subsequent `step`/`resize` calls
    /// leave the state untouched.
    pub fn stop(&mut self) {
        if self.state != FieldState::Stopped {
            self.state = FieldState::Stopped;
            log::debug!("field stopped after {} frames", self.frame);
        }
    }

    /// Fill `out` with one draw instance per particle.
    ///
    /// Drawn radius and alpha follow the remaining-life fraction when the
    /// lifecycle fades/shrinks (the default); otherwise the base radius and
    /// the configured base alpha are used.
    pub fn disc_instances(&self, out: &mut Vec<DiscInstance>) {
        out.clear();
        for p in &self.particles {
            let ratio = p.life_ratio();
            let radius = if self.lifecycle.shrinks() {
                p.radius * ratio
            } else {
                p.radius
            };
            let alpha = if self.lifecycle.fades() {
                ratio
            } else {
                self.visuals.base_alpha
            };
            out.push(DiscInstance {
                center: p.position.to_array(),
                radius,
                _pad: 0.0,
                color: [p.color[0], p.color[1], p.color[2], alpha],
            });
        }
    }

    /// Fill `out` with a line instance for every unordered particle pair
    /// closer than the link radius (strict `<`).
    ///
    /// Link alpha is `(1 - distance / radius) * link_alpha`. This is an
    /// O(n²) pass; it is only acceptable because the population is capped
    /// at [`MAX_POPULATION`] (≤ 4950 pairs). Larger populations would need
    /// spatial binning instead.
    pub fn link_instances(&self, out: &mut Vec<LinkInstance>) {
        out.clear();
        let radius = self.visuals.link_radius;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                // A coincident pair has no direction to widen the line along.
                if distance < radius && distance > 0.0 {
                    out.push(LinkInstance {
                        a: a.position.to_array(),
                        b: b.position.to_array(),
                        alpha: (1.0 - distance / radius) * self.visuals.link_alpha,
                        _pad: 0.0,
                    });
                }
            }
        }
    }

    /// The current particle arena.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The current surface extent in pixels.
    pub fn extent(&self) -> Vec2 {
        self.extent
    }

    /// The current lifecycle state.
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Frames stepped since attach.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The visual configuration this field renders with.
    pub fn visuals(&self) -> &VisualConfig {
        &self.visuals
    }
}

/// Reflect one axis off `[0, extent]`, evaluated on an updated position:
/// outside on either side flips the velocity sign and clamps the position
/// to the nearest boundary.
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 || *pos > extent {
        *vel = -*vel;
        *pos = pos.clamp(0.0, extent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::Palette;

    fn seeded_field(extent: Vec2) -> Field {
        let mut field = Field::new(
            Lifecycle::default(),
            VisualConfig::default(),
            SpawnContext::seeded(1234),
        );
        field.attach(extent);
        field
    }

    #[test]
    fn test_population_formula() {
        assert_eq!(population_for(Vec2::new(800.0, 600.0)), 48);
        assert_eq!(population_for(Vec2::new(2000.0, 1000.0)), MAX_POPULATION);
        assert_eq!(population_for(Vec2::new(50.0, 50.0)), 0);
    }

    #[test]
    fn test_attach_fills_arena() {
        let field = seeded_field(Vec2::new(800.0, 600.0));
        assert_eq!(field.state(), FieldState::Running);
        assert_eq!(field.particles().len(), 48);
    }

    #[test]
    fn test_reflect_axis_clamps_and_flips() {
        let mut pos = -5.0;
        let mut vel = -2.0;
        reflect_axis(&mut pos, &mut vel, 800.0);
        assert_eq!(pos, 0.0);
        assert_eq!(vel, 2.0);

        let mut pos = 803.5;
        let mut vel = 1.5;
        reflect_axis(&mut pos, &mut vel, 800.0);
        assert_eq!(pos, 800.0);
        assert_eq!(vel, -1.5);

        // Inside: untouched.
        let mut pos = 400.0;
        let mut vel = 0.25;
        reflect_axis(&mut pos, &mut vel, 800.0);
        assert_eq!(pos, 400.0);
        assert_eq!(vel, 0.25);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let mut field = seeded_field(Vec2::new(400.0, 300.0));
        field.particles[0] = Particle {
            position: Vec2::new(0.1, 0.1),
            velocity: Vec2::new(-0.2, -0.2),
            radius: 3.0,
            color: [1.0, 1.0, 1.0],
            age: 0,
            lifespan: 300,
        };
        field.step();

        let p = &field.particles()[0];
        assert_eq!(p.position, Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::new(0.2, 0.2));
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let extent = Vec2::new(300.0, 200.0);
        let mut field = seeded_field(extent);
        for _ in 0..1000 {
            field.step();
            for p in field.particles() {
                assert!(p.position.x >= 0.0 && p.position.x <= extent.x);
                assert!(p.position.y >= 0.0 && p.position.y <= extent.y);
                assert!(p.age <= p.lifespan);
            }
        }
    }

    #[test]
    fn test_population_invariant_across_respawns() {
        let mut field = seeded_field(Vec2::new(500.0, 400.0));
        let count = field.particles().len();
        // 500 frames crosses every initial lifespan (max 399).
        for _ in 0..500 {
            field.step();
            assert_eq!(field.particles().len(), count);
        }
    }

    #[test]
    fn test_expiry_respawns_in_place() {
        let mut field = seeded_field(Vec2::new(400.0, 300.0));
        let lifespan = field.particles[3].lifespan;
        field.particles[3].age = lifespan - 1;
        let before = field.particles[3].clone();

        field.step();

        let respawned = &field.particles()[3];
        assert_eq!(respawned.age, 0);
        // Freshly sampled state, not the expired one aged past its end.
        assert!(respawned.lifespan >= 200 && respawned.lifespan < 400);
        assert_ne!((before.position, before.radius), (respawned.position, respawned.radius));
    }

    #[test]
    fn test_resize_keeps_particles_and_count() {
        let mut field = seeded_field(Vec2::new(800.0, 600.0));
        let before = field.particles().to_vec();

        field.resize(Vec2::new(200.0, 150.0));

        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.extent(), Vec2::new(200.0, 150.0));

        // Out-of-bounds survivors are pulled back by reflection when stepped.
        for _ in 0..2 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 200.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 150.0);
        }
    }

    #[test]
    fn test_stop_freezes_state() {
        let mut field = seeded_field(Vec2::new(640.0, 480.0));
        for _ in 0..10 {
            field.step();
        }
        field.stop();

        let snapshot = field.particles().to_vec();
        let frame = field.frame();

        field.step();
        field.resize(Vec2::new(100.0, 100.0));
        field.stop();
        field.attach(Vec2::new(100.0, 100.0));

        assert_eq!(field.state(), FieldState::Stopped);
        assert_eq!(field.particles(), &snapshot[..]);
        assert_eq!(field.frame(), frame);
        assert_eq!(field.extent(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_seeded_fields_evolve_identically() {
        let extent = Vec2::new(800.0, 600.0);
        let mut a = Field::new(
            Lifecycle::default(),
            VisualConfig::default(),
            SpawnContext::seeded(77),
        );
        let mut b = Field::new(
            Lifecycle::default(),
            VisualConfig::default(),
            SpawnContext::seeded(77),
        );
        a.attach(extent);
        b.attach(extent);

        for _ in 0..500 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_links_use_strict_distance() {
        let mut field = seeded_field(Vec2::new(1000.0, 1000.0));
        field.particles.truncate(2);
        field.particles[0].position = Vec2::new(0.0, 0.0);
        field.particles[1].position = Vec2::new(150.0, 0.0);

        let mut links = Vec::new();
        field.link_instances(&mut links);
        assert!(links.is_empty());

        field.particles[1].position = Vec2::new(149.0, 0.0);
        field.link_instances(&mut links);
        assert_eq!(links.len(), 1);
        let expected = (1.0 - 149.0 / 150.0) * 0.2;
        assert!((links[0].alpha - expected).abs() < 1e-6);
    }

    #[test]
    fn test_barely_in_range_link_has_near_zero_alpha() {
        let mut field = seeded_field(Vec2::new(1000.0, 1000.0));
        field.particles.truncate(2);
        field.particles[0].position = Vec2::new(0.0, 0.0);
        field.particles[1].position = Vec2::new(149.999, 0.0);

        let mut links = Vec::new();
        field.link_instances(&mut links);
        assert_eq!(links.len(), 1);
        assert!(links[0].alpha > 0.0);
        assert!(links[0].alpha < 1e-4);
    }

    #[test]
    fn test_disc_alpha_follows_life_ratio() {
        let mut field = seeded_field(Vec2::new(400.0, 300.0));
        field.particles[0].age = field.particles[0].lifespan / 2;
        let ratio = field.particles[0].life_ratio();
        let base_radius = field.particles[0].radius;

        let mut discs = Vec::new();
        field.disc_instances(&mut discs);

        assert!((discs[0].color[3] - ratio).abs() < 1e-6);
        assert!((discs[0].radius - base_radius * ratio).abs() < 1e-6);
    }

    #[test]
    fn test_disc_alpha_without_fade() {
        let mut field = Field::new(
            Lifecycle::new().keep_opacity().keep_radius(),
            VisualConfig::default().palette(Palette::Ocean),
            SpawnContext::seeded(5),
        );
        field.attach(Vec2::new(400.0, 300.0));
        field.particles[0].age = field.particles[0].lifespan / 2;

        let mut discs = Vec::new();
        field.disc_instances(&mut discs);

        assert_eq!(discs[0].color[3], 0.7);
        assert_eq!(discs[0].radius, field.particles()[0].radius);
    }
}
