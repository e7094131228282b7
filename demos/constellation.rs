//! The classic constellation look: indigo, purple, and blue particles on a
//! light neutral backdrop, linked when they drift within 150 px of each
//! other.
//!
//! Run with: `cargo run --example constellation`

use plexfield::Background;

fn main() {
    env_logger::init();

    Background::new().with_title("constellation").run();
}
