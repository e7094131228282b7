//! A denser, wired look: neon colors, wide link radius, brighter strokes.
//! Seeded, so every run plays out the same field.
//!
//! Run with: `cargo run --example neon_net`

use plexfield::prelude::*;

fn main() {
    env_logger::init();

    Background::new()
        .with_title("neon net")
        .with_seed(0xC0FFEE)
        .with_visuals(
            VisualConfig::new()
                .palette(Palette::Neon)
                .background([0.01, 0.01, 0.03])
                .link_color([0.8, 0.2, 0.9])
                .link_radius(180.0)
                .link_alpha(0.35)
                .link_width(1.5),
        )
        .run();
}
