//! UI components library

pub mod rating_bar;

pub use rating_bar::RatingBar;
