//! Mount-time configuration for the picker surface.

use tracing::warn;

use crate::error::ConfigError;

/// Largest hue in degrees the hue slider can report.
pub const MAX_HUE: u16 = 360;

/// Hue the slider starts on unless the config says otherwise.
pub const DEFAULT_HUE: u16 = 180;

/// Validated dimensions of the saturation/value surface plus the starting hue.
///
/// Construct with [`PickerConfig::new`]; a config that exists is always safe
/// to derive colors from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerConfig {
    width: f64,
    height: f64,
    initial_hue: u16,
}

impl PickerConfig {
    /// Validate surface dimensions.
    ///
    /// `height` must exceed 1 because value is computed as `1 - y / (height - 1)`.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !width.is_finite() || width <= 0.0 {
            warn!(width, "rejecting picker config: bad width");
            return Err(ConfigError::InvalidWidth { width });
        }
        if !height.is_finite() {
            warn!("rejecting picker config: height is not finite");
            return Err(ConfigError::NonFiniteHeight);
        }
        if height <= 1.0 {
            warn!(height, "rejecting picker config: height must exceed 1");
            return Err(ConfigError::HeightTooSmall { height });
        }
        Ok(Self {
            width,
            height,
            initial_hue: DEFAULT_HUE,
        })
    }

    /// Start the hue slider somewhere other than [`DEFAULT_HUE`].
    pub fn with_initial_hue(mut self, hue: u16) -> Result<Self, ConfigError> {
        if hue > MAX_HUE {
            warn!(hue, "rejecting picker config: hue out of range");
            return Err(ConfigError::HueOutOfRange { hue });
        }
        self.initial_hue = hue;
        Ok(self)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn initial_hue(&self) -> u16 {
        self.initial_hue
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: 627.0,
            height: 300.0,
            initial_hue: DEFAULT_HUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_surface() {
        let config = PickerConfig::new(627.0, 300.0).unwrap();
        assert_eq!(config.width(), 627.0);
        assert_eq!(config.height(), 300.0);
        assert_eq!(config.initial_hue(), DEFAULT_HUE);
    }

    #[test]
    fn test_rejects_height_of_one() {
        assert_eq!(
            PickerConfig::new(100.0, 1.0),
            Err(ConfigError::HeightTooSmall { height: 1.0 })
        );
        assert_eq!(
            PickerConfig::new(100.0, 0.5),
            Err(ConfigError::HeightTooSmall { height: 0.5 })
        );
        assert!(PickerConfig::new(100.0, -4.0).is_err());
    }

    #[test]
    fn test_accepts_height_just_above_one() {
        assert!(PickerConfig::new(100.0, 1.5).is_ok());
    }

    #[test]
    fn test_rejects_bad_width() {
        assert_eq!(
            PickerConfig::new(0.0, 100.0),
            Err(ConfigError::InvalidWidth { width: 0.0 })
        );
        assert!(PickerConfig::new(f64::NAN, 100.0).is_err());
        assert!(PickerConfig::new(f64::INFINITY, 100.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_height() {
        assert_eq!(
            PickerConfig::new(100.0, f64::INFINITY),
            Err(ConfigError::NonFiniteHeight)
        );
    }

    #[test]
    fn test_initial_hue() {
        let config = PickerConfig::default().with_initial_hue(360).unwrap();
        assert_eq!(config.initial_hue(), 360);
        assert_eq!(
            PickerConfig::default().with_initial_hue(361),
            Err(ConfigError::HueOutOfRange { hue: 361 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PickerConfig::new(10.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "surface height must be greater than 1, got 1");
    }
}
