//! # floem-hsv-picker
//!
//! An HSV color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! Three surfaces share one [`PickerState`]: a saturation/value map, a hue
//! slider, and a readout showing the color as hex, RGB, and HSL. The
//! surfaces report raw input to the state, which derives the color
//! synchronously and hands it back down.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsv_picker::{hsv_picker, PickerConfig, PickerState};
//!
//! let config = PickerConfig::new(320.0, 200.0).unwrap();
//! let state = RwSignal::new(PickerState::new(config));
//! // Use `hsv_picker(state)` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod error;
mod hue_slider;
mod math;
mod picker;
mod readout;
mod state;
mod sv_area;

pub use color::SolidColor;
pub use config::{DEFAULT_HUE, MAX_HUE, PickerConfig};
pub use error::ConfigError;
pub use readout::Readout;
pub use state::{DerivedColor, PickerState, Position, derive};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level color picker view.
///
/// The picker reads from and writes to `state`. Reports from the surface
/// and slider update the signal; external changes to it are reflected in
/// the UI.
pub fn hsv_picker(state: RwSignal<PickerState>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker(state)
}
