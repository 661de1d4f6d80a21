//! Sizing, color, and styling constants for the picker.

/// Hue slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Marker circle radius on the saturation/value surface
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on the hue slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the swatch and surface
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Swatch edge length in the readout
pub const SWATCH_SIZE: f32 = 40.0;

/// Readout font size
pub const READOUT_FONT: f32 = 12.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Width of the hue spectrum raster; scaled to the track by the renderer
pub const HUE_RASTER_WIDTH: u32 = 361;

/// Edge length of the saturation/value raster; scaled to the surface
pub const SV_RASTER_SIZE: u32 = 256;
