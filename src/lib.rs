//! # Plexfield
//!
//! Animated "constellation" particle-field backgrounds for desktop apps.
//!
//! A bounded population of softly colored particles drifts across the
//! window, reflecting off the edges, fading and shrinking as it ages, with
//! connecting lines drawn between nearby pairs. The simulation runs on the
//! CPU and is fully deterministic under a seed; wgpu only draws.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plexfield::Background;
//!
//! fn main() {
//!     Background::new().run();
//! }
//! ```
//!
//! `run()` blocks until the window closes and never panics: on a machine
//! without a usable GPU it logs a warning and returns, because a decorative
//! background is never worth an error dialog.
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`Field`] owns a fixed arena of particles, sized once from the surface
//! area (`min(floor(width * height / 10_000), 100)`). Expired particles are
//! respawned in their slot, so the population never changes while the field
//! runs. The field's lifecycle is `Detached → Running → Stopped`; `stop()`
//! freezes the state for good.
//!
//! ### Configuration
//!
//! Aging is configured through [`Lifecycle`] (lifespan range, fade-out,
//! shrink-out), looks through [`VisualConfig`] ([`Palette`], link radius and
//! styling, background color):
//!
//! ```no_run
//! use plexfield::{Background, Lifecycle, Palette, VisualConfig};
//!
//! Background::new()
//!     .with_palette(Palette::Neon)
//!     .with_visuals(VisualConfig::new()
//!         .palette(Palette::Neon)
//!         .background([0.01, 0.01, 0.03])
//!         .link_radius(120.0))
//!     .with_lifecycle(Lifecycle::new().lifespan_range(300..600))
//!     .run();
//! ```
//!
//! ### Headless use
//!
//! Hosts that already own a render loop can skip the built-in window:
//! `Background::into_field()` hands over the bare [`Field`], which exposes
//! `attach`/`step`/`resize`/`stop` plus the per-frame instance extraction
//! ([`DiscInstance`], [`LinkInstance`]). Seed it with
//! [`Background::with_seed`] for reproducible runs — the test suite drives
//! the simulation this way.

mod background;
pub mod error;
mod field;
mod gpu;
pub mod lifecycle;
mod particle;
mod spawn;
pub mod time;
pub mod visuals;
mod window;

pub use background::Background;
pub use error::{GpuError, RunError};
pub use field::{population_for, Field, FieldState, AREA_PER_PARTICLE, MAX_POPULATION};
pub use glam::Vec2;
pub use gpu::links::{LinkInstance, MAX_LINKS};
pub use gpu::DiscInstance;
pub use lifecycle::Lifecycle;
pub use particle::Particle;
pub use spawn::SpawnContext;
pub use time::Time;
pub use visuals::{Palette, VisualConfig};

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use plexfield::prelude::*;
///
/// Background::new().with_palette(Palette::Ocean).run();
/// ```
pub mod prelude {
    pub use crate::background::Background;
    pub use crate::field::{Field, FieldState};
    pub use crate::lifecycle::Lifecycle;
    pub use crate::particle::Particle;
    pub use crate::spawn::SpawnContext;
    pub use crate::visuals::{Palette, VisualConfig};
    pub use crate::Vec2;
}
