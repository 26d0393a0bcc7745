//! Rating bar configuration.
//!
//! Read once at widget construction. All fields have defaults, so hosts can
//! deserialize partial configurations. The postcard helpers use the same
//! wire format the rest of the device stack persists records with, letting
//! a host store widget settings alongside its other data.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Default gap between stars in pixels.
pub const DEFAULT_STAR_SPACE_PX: u32 = 10;

/// Default star side length in pixels.
pub const DEFAULT_STAR_SIZE_PX: u32 = 20;

/// Default number of stars.
pub const DEFAULT_STAR_NUM: u32 = 5;

/// Errors from encoding or decoding a persisted configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("failed to encode configuration: {0}")]
    Encode(postcard::Error),
    #[error("failed to decode configuration: {0}")]
    Decode(postcard::Error),
}

/// Construction-time configuration for [`RatingBar`](crate::RatingBar).
///
/// Star icons are art assets rather than configuration and are supplied
/// through the widget's builder methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingBarConfig {
    /// Gap between stars in pixels
    pub star_space: u32,
    /// Star side length in pixels
    pub star_size: u32,
    /// Number of stars
    pub star_num: u32,
    /// Initial rating
    pub rating: f32,
    /// Round ratings up to whole stars
    pub integer_step: bool,
}

impl Default for RatingBarConfig {
    fn default() -> Self {
        Self {
            star_space: DEFAULT_STAR_SPACE_PX,
            star_size: DEFAULT_STAR_SIZE_PX,
            star_num: DEFAULT_STAR_NUM,
            rating: 0.0,
            integer_step: false,
        }
    }
}

impl RatingBarConfig {
    /// Encode the configuration to postcard bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    /// Decode a configuration from postcard bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = RatingBarConfig::default();
        assert_eq!(config.star_space, 10);
        assert_eq!(config.star_size, 20);
        assert_eq!(config.star_num, 5);
        assert_eq!(config.rating, 0.0);
        assert!(!config.integer_step);
    }

    #[test]
    fn postcard_round_trip_preserves_settings() {
        let config = RatingBarConfig {
            star_space: 4,
            star_size: 32,
            star_num: 10,
            rating: 7.5,
            integer_step: true,
        };

        let bytes = config.to_bytes().unwrap();
        assert_eq!(RatingBarConfig::from_bytes(&bytes).unwrap(), config);
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let bytes = RatingBarConfig::default().to_bytes().unwrap();
        assert!(RatingBarConfig::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
