//! The host-facing background builder.
//!
//! A [`Background`] collects configuration, then `run()` owns the whole
//! window lifetime: create the window and GPU state, attach the field,
//! step/render until close, tear down. The animation is decorative, so
//! `run()` never panics and never surfaces setup failures — a machine
//! without a usable GPU just doesn't get the background.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::error::RunError;
use crate::field::Field;
use crate::lifecycle::Lifecycle;
use crate::spawn::SpawnContext;
use crate::visuals::{Palette, VisualConfig};
use crate::window::App;

/// A particle-field background builder.
///
/// Use method chaining to configure, then call `.run()`.
///
/// # Example
///
/// ```no_run
/// use plexfield::{Background, Lifecycle, Palette};
///
/// Background::new()
///     .with_palette(Palette::Ocean)
///     .with_lifecycle(Lifecycle::new().lifespan_range(300..600))
///     .run();
/// ```
pub struct Background {
    lifecycle: Lifecycle,
    visuals: VisualConfig,
    seed: Option<u64>,
    title: String,
}

impl Background {
    /// Create a background with default settings: the indigo palette on a
    /// light neutral backdrop, fading and shrinking particles.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            visuals: VisualConfig::default(),
            seed: None,
            title: "plexfield".to_string(),
        }
    }

    /// Replace the aging configuration.
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// Replace the visual configuration.
    pub fn with_visuals(mut self, visuals: VisualConfig) -> Self {
        self.visuals = visuals;
        self
    }

    /// Shorthand for setting just the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.visuals.palette = palette;
        self
    }

    /// Seed the spawn RNG for a reproducible field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the field this background would run.
    ///
    /// Exposed for headless use: hosts that drive their own surface can
    /// step the field and pull instances themselves.
    pub fn into_field(self) -> Field {
        let spawn = match self.seed {
            Some(seed) => SpawnContext::seeded(seed),
            None => SpawnContext::from_entropy(),
        };
        Field::new(self.lifecycle, self.visuals, spawn)
    }

    /// Run the background, blocking until the window is closed.
    ///
    /// Setup failures are logged at warn level and swallowed: the caller
    /// proceeds without the animation.
    pub fn run(self) {
        if let Err(e) = self.try_run() {
            log::warn!("particle background disabled: {}", e);
        }
    }

    /// Run the background, surfacing setup failures.
    pub fn try_run(self) -> Result<(), RunError> {
        let title = self.title.clone();
        let field = self.into_field();

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(field, title);
        event_loop.run_app(&mut app)?;

        match app.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldState;
    use glam::Vec2;

    #[test]
    fn test_builder_produces_detached_field() {
        let field = Background::new().with_seed(3).into_field();
        assert_eq!(field.state(), FieldState::Detached);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_builder_settings_reach_field() {
        let mut field = Background::new()
            .with_seed(3)
            .with_palette(Palette::Grayscale)
            .into_field();
        field.attach(Vec2::new(400.0, 300.0));

        let colors = Palette::Grayscale.colors();
        for p in field.particles() {
            assert!(colors.contains(&p.color));
        }
    }

    #[test]
    fn test_seeded_builders_agree() {
        let mut a = Background::new().with_seed(11).into_field();
        let mut b = Background::new().with_seed(11).into_field();
        a.attach(Vec2::new(640.0, 480.0));
        b.attach(Vec2::new(640.0, 480.0));
        assert_eq!(a.particles(), b.particles());
    }
}
