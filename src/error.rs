//! Errors raised while configuring a picker.

use thiserror::Error;

/// A mount-time configuration the picker refuses to run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The value axis divides by `height - 1`, so the surface must be taller than 1.
    #[error("surface height must be greater than 1, got {height}")]
    HeightTooSmall { height: f64 },

    #[error("surface height must be a finite number")]
    NonFiniteHeight,

    #[error("surface width must be a positive finite number, got {width}")]
    InvalidWidth { width: f64 },

    #[error("initial hue must be within 0..=360 degrees, got {hue}")]
    HueOutOfRange { hue: u16 },
}
