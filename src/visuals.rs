//! Visual configuration: palettes, link styling, background color.
//!
//! Rendering options live here, separate from the aging behavior in
//! [`crate::lifecycle`].
//!
//! # Example
//!
//! ```
//! use plexfield::{Palette, VisualConfig};
//!
//! let visuals = VisualConfig::new()
//!     .palette(Palette::Ocean)
//!     .background([0.01, 0.02, 0.05])
//!     .link_radius(120.0);
//! ```

/// Pre-defined color palettes particles draw their colors from.
///
/// A palette is a small set of RGB stops (0-1 channels) sampled uniformly at
/// spawn; the drawn alpha comes from the lifecycle, not the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// The classic constellation mix of indigo, purple, and blue tones
    /// (default).
    #[default]
    Indigo,

    /// Cool blues and teals.
    Ocean,

    /// Vibrant pink, purple, and cyan.
    Neon,

    /// Soft grays, for monochrome backdrops.
    Grayscale,
}

impl Palette {
    /// The RGB stops for this palette.
    pub fn colors(&self) -> &'static [[f32; 3]] {
        match self {
            Palette::Indigo => &[
                [0.310, 0.275, 0.898], // Indigo
                [0.263, 0.220, 0.792],
                [0.216, 0.188, 0.639],
                [0.427, 0.157, 0.851], // Purple
                [0.357, 0.129, 0.714],
                [0.298, 0.114, 0.584],
                [0.145, 0.388, 0.922], // Blue
                [0.114, 0.306, 0.847],
                [0.118, 0.251, 0.686],
            ],
            Palette::Ocean => &[
                [0.0, 0.2, 0.4],
                [0.0, 0.4, 0.6],
                [0.2, 0.6, 0.8],
                [0.6, 0.9, 1.0],
            ],
            Palette::Neon => &[
                [1.0, 0.0, 0.5],
                [0.5, 0.0, 1.0],
                [0.0, 0.5, 1.0],
                [0.0, 1.0, 1.0],
            ],
            Palette::Grayscale => &[
                [0.35, 0.35, 0.35],
                [0.5, 0.5, 0.5],
                [0.65, 0.65, 0.65],
            ],
        }
    }
}

/// Rendering options for the field.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Active palette.
    pub palette: Palette,
    /// Alpha used for particles when fade-out is disabled.
    pub base_alpha: f32,
    /// Background clear color (RGB 0-1).
    pub background: [f32; 3],
    /// Maximum pair distance in pixels that still draws a link.
    pub link_radius: f32,
    /// Scale applied to the distance-derived link alpha.
    pub link_alpha: f32,
    /// Link stroke color (RGB 0-1).
    pub link_color: [f32; 3],
    /// Link stroke width in pixels.
    pub link_width: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Indigo,
            base_alpha: 0.7,
            background: [0.98, 0.98, 0.98],
            link_radius: 150.0,
            link_alpha: 0.2,
            link_color: [0.353, 0.314, 0.784],
            link_width: 1.0,
        }
    }
}

impl VisualConfig {
    /// Create the default visual configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the alpha used when fade-out is disabled.
    pub fn base_alpha(mut self, alpha: f32) -> Self {
        self.base_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the background clear color.
    pub fn background(mut self, rgb: [f32; 3]) -> Self {
        self.background = rgb;
        self
    }

    /// Set the maximum pair distance (pixels) that still draws a link.
    pub fn link_radius(mut self, radius: f32) -> Self {
        self.link_radius = radius;
        self
    }

    /// Set the scale applied to the distance-derived link alpha.
    pub fn link_alpha(mut self, alpha: f32) -> Self {
        self.link_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the link stroke color.
    pub fn link_color(mut self, rgb: [f32; 3]) -> Self {
        self.link_color = rgb;
        self
    }

    /// Set the link stroke width in pixels.
    pub fn link_width(mut self, width: f32) -> Self {
        self.link_width = width.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indigo_has_nine_stops() {
        assert_eq!(Palette::Indigo.colors().len(), 9);
    }

    #[test]
    fn test_all_palettes_in_range() {
        for palette in [
            Palette::Indigo,
            Palette::Ocean,
            Palette::Neon,
            Palette::Grayscale,
        ] {
            for color in palette.colors() {
                for channel in color {
                    assert!((0.0..=1.0).contains(channel));
                }
            }
        }
    }

    #[test]
    fn test_defaults_match_classic_look() {
        let visuals = VisualConfig::default();
        assert_eq!(visuals.link_radius, 150.0);
        assert_eq!(visuals.link_alpha, 0.2);
        assert_eq!(visuals.link_width, 1.0);
        assert_eq!(visuals.base_alpha, 0.7);
    }

    #[test]
    fn test_builder_clamps() {
        let visuals = VisualConfig::new().base_alpha(2.0).link_alpha(-1.0);
        assert_eq!(visuals.base_alpha, 1.0);
        assert_eq!(visuals.link_alpha, 0.0);
    }
}
