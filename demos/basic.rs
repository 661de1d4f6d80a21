//! Standalone demo: opens a window with the color picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv_picker::{hsv_picker, PickerConfig, PickerState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = PickerConfig::new(320.0, 200.0)?.with_initial_hue(150)?;
    let state = RwSignal::new(PickerState::new(config));

    floem::Application::new()
        .window(
            move |_| {
                hsv_picker(state).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((340.0, 420.0))
                    .title("floem-hsv-picker"),
            ),
        )
        .run();

    Ok(())
}
