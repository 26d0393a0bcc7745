//! Widget UI system: core traits, icon rasters, and the rating bar component.

pub mod components;
pub mod core;
pub mod icon;

// Re-export commonly used items
pub use components::RatingBar;
pub use icon::{IconError, StarIcon};
pub use self::core::{
    DirtyRegion, Drawable, Interactive, TouchEvent, TouchPoint, TouchResult, Touchable,
};
