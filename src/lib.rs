//! Touch-driven star rating bar widget for embedded-graphics displays.
//!
//! Renders a row of star icons on any `DrawTarget<Color = Rgb565>` and maps
//! press/drag touch input to a rating value:
//! - Partial-star rendering by clipping a rasterized "filled star" icon
//! - One-decimal or integer-step rating granularity
//! - Single-slot change listener invoked on every rating mutation
//! - Serde/postcard configuration with sensible defaults
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for simulators and tests). The host
//! framework owns the display and event loop; the widget only needs a draw
//! target and a stream of touch events.

#![no_std]

extern crate alloc;

pub mod config;
pub mod ui;

// Re-export commonly used items
pub use config::{ConfigError, RatingBarConfig};
pub use ui::components::RatingBar;
pub use ui::core::{
    DirtyRegion, Drawable, Interactive, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use ui::icon::{IconError, StarIcon};
