//! Particle aging configuration.
//!
//! Every particle ages one frame per simulation step and is respawned in
//! place once its lifespan runs out. By default the remaining-life fraction
//! drives both opacity (fade out) and drawn radius (shrink out), so
//! particles dissolve rather than pop.
//!
//! # Example
//!
//! ```
//! use plexfield::Lifecycle;
//!
//! // Longer-lived particles that dim but never shrink.
//! let lifecycle = Lifecycle::new()
//!     .lifespan_range(400..800)
//!     .keep_radius();
//! ```

use std::ops::Range;

/// Default lifespan range in frames, sampled per spawn.
pub const DEFAULT_LIFESPAN: Range<u32> = 200..400;

/// Aging configuration builder.
///
/// Collected by `Background` and consumed by the field: the lifespan range
/// feeds every spawn, the fade/shrink flags feed render extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    /// Half-open range a particle's lifespan is drawn from.
    lifespan: Range<u32>,
    /// Whether drawn alpha follows the remaining-life fraction.
    fade_out: bool,
    /// Whether drawn radius follows the remaining-life fraction.
    shrink_out: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            lifespan: DEFAULT_LIFESPAN,
            fade_out: true,
            shrink_out: true,
        }
    }
}

impl Lifecycle {
    /// Create the default lifecycle configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the half-open range (in frames) lifespans are sampled from.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn lifespan_range(mut self, range: Range<u32>) -> Self {
        assert!(range.start < range.end, "lifespan range must be non-empty");
        self.lifespan = range;
        self
    }

    /// Keep full opacity for the whole lifetime instead of fading out.
    pub fn keep_opacity(mut self) -> Self {
        self.fade_out = false;
        self
    }

    /// Keep the full base radius for the whole lifetime instead of shrinking.
    pub fn keep_radius(mut self) -> Self {
        self.shrink_out = false;
        self
    }

    /// `(start, end)` of the lifespan sampling range.
    pub fn lifespan_bounds(&self) -> (u32, u32) {
        (self.lifespan.start, self.lifespan.end)
    }

    /// Whether drawn alpha follows the remaining-life fraction.
    pub fn fades(&self) -> bool {
        self.fade_out
    }

    /// Whether drawn radius follows the remaining-life fraction.
    pub fn shrinks(&self) -> bool {
        self.shrink_out
    }
}
