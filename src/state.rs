//! Picker state: the single owner of hue, pointer position, and the color
//! derived from them.
//!
//! Leaves never hold state of their own. They call [`PickerState::report_hue`]
//! or [`PickerState::report_position`] and read back [`PickerState::derived`];
//! both report operations recompute before returning, so a reader can never
//! see a color built from a stale hue/position pair.

use tracing::{debug, trace};

use crate::color::SolidColor;
use crate::config::PickerConfig;

/// Last pointer position on the saturation/value surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Geometric center of the configured surface.
    pub fn center(config: &PickerConfig) -> Self {
        Self {
            x: config.width() / 2.0,
            y: config.height() / 2.0,
        }
    }
}

/// The current color as an HSV triple.
///
/// `hue` is in degrees; `saturation` and `value` are in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedColor {
    pub hue: u16,
    pub saturation: f64,
    pub value: f64,
}

impl DerivedColor {
    /// Convert to an RGB color.
    pub fn to_color(&self) -> SolidColor {
        SolidColor::from_hsv(self.hue as f64, self.saturation, self.value)
    }
}

/// Map a hue and pointer position to a color.
///
/// Saturation grows left to right, value falls top to bottom; `y = 0` is full
/// value and `y = height - 1` is black. Both are clamped into 0.0–1.0.
pub fn derive(hue: u16, position: Position, config: &PickerConfig) -> DerivedColor {
    let saturation = (position.x / config.width()).clamp(0.0, 1.0);
    let value = (1.0 - position.y / (config.height() - 1.0)).clamp(0.0, 1.0);
    DerivedColor {
        hue,
        saturation,
        value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    config: PickerConfig,
    hue: u16,
    position: Position,
    derived: Option<DerivedColor>,
}

impl PickerState {
    /// Mount a picker: hue from the config, pointer at the surface center,
    /// and the first color derived immediately.
    pub fn new(config: PickerConfig) -> Self {
        let mut state = Self::unmounted(config);
        state.recompute();
        debug!(
            width = config.width(),
            height = config.height(),
            hue = state.hue,
            "picker state mounted"
        );
        state
    }

    /// Same initial hue and position as [`PickerState::new`], but nothing
    /// derived until the first report arrives.
    pub fn unmounted(config: PickerConfig) -> Self {
        Self {
            config,
            hue: config.initial_hue(),
            position: Position::center(&config),
            derived: None,
        }
    }

    /// Replace the hue selection. The hue slider keeps this within 0..=360.
    pub fn report_hue(&mut self, hue: u16) {
        self.hue = hue;
        self.recompute();
    }

    /// Replace the pointer position. The surface keeps it within its bounds.
    pub fn report_position(&mut self, x: f64, y: f64) {
        self.position = Position::new(x, y);
        self.recompute();
    }

    fn recompute(&mut self) {
        let derived = derive(self.hue, self.position, &self.config);
        trace!(
            hue = derived.hue,
            saturation = derived.saturation,
            value = derived.value,
            "recomputed color"
        );
        self.derived = Some(derived);
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn derived(&self) -> Option<DerivedColor> {
        self.derived
    }

    pub fn color(&self) -> Option<SolidColor> {
        self.derived.map(|d| d.to_color())
    }

    /// Backdrop tint for the saturation/value surface: the current hue at
    /// full saturation and value. Depends on hue alone.
    pub fn backdrop(&self) -> SolidColor {
        SolidColor::from_hsv(self.hue as f64, 1.0, 1.0)
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
