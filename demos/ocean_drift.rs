//! Slow blues on a deep dark backdrop. Longer lifespans and no shrinking,
//! so particles dim away at full size like lights under water.
//!
//! Run with: `cargo run --example ocean_drift`

use plexfield::prelude::*;

fn main() {
    env_logger::init();

    Background::new()
        .with_title("ocean drift")
        .with_visuals(
            VisualConfig::new()
                .palette(Palette::Ocean)
                .background([0.004, 0.02, 0.05])
                .link_color([0.2, 0.5, 0.7])
                .link_radius(120.0),
        )
        .with_lifecycle(Lifecycle::new().lifespan_range(400..800).keep_radius())
        .run();
}
