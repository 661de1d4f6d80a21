//! Color readout: swatch plus hex, RGB, and HSL rows, each with a copy
//! button. Renders nothing until the picker state has derived a color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use tracing::warn;

use crate::color::SolidColor;
use crate::constants;
use crate::state::{DerivedColor, PickerState};

/// Textual forms of one derived color.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    color: SolidColor,
    hex: String,
    rgb: (u8, u8, u8),
    hsl: String,
}

impl Readout {
    /// `None` when no color has been derived yet.
    pub fn from_derived(derived: Option<DerivedColor>) -> Option<Self> {
        let color = derived?.to_color();
        Some(Self {
            hex: color.to_hex(),
            rgb: color.to_rgb(),
            hsl: color.to_hsl_string(),
            color,
        })
    }

    /// `#RRGGBB`
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// `hsl(H, S%, L%)`
    pub fn hsl(&self) -> &str {
        &self.hsl
    }

    /// `rgb(R, G, B)`
    pub fn rgb_string(&self) -> String {
        self.color.to_rgb_string()
    }

    /// Whether text drawn on top of this color should be dark.
    pub fn wants_dark_text(&self) -> bool {
        !self.color.is_dark()
    }
}

/// Creates the readout for `state`'s derived color.
pub(crate) fn color_readout(state: RwSignal<PickerState>) -> impl IntoView {
    let readout = move || Readout::from_derived(state.get().derived());

    h_stack((
        container(
            label(move || readout().map(|r| r.hex).unwrap_or_default()).style(move |s| {
                let text = match readout() {
                    Some(r) if r.wants_dark_text() => Color::rgb8(20, 20, 20),
                    _ => Color::WHITE,
                };
                s.font_size(constants::LABEL_FONT)
                    .font_family("monospace".to_string())
                    .color(text)
            }),
        )
        .style(move |s| {
            let Some(r) = readout() else {
                return s.hide();
            };
            let (red, green, blue) = r.rgb();
            s.width(constants::SWATCH_SIZE * 2.0)
                .height(constants::SWATCH_SIZE * 2.0)
                .items_center()
                .justify_center()
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(Color::rgb8(red, green, blue))
        }),
        v_stack((
            readout_row("HEX", move || readout().map(|r| r.hex).unwrap_or_default()),
            readout_row("RGB", move || readout().map(|r| r.rgb_string()).unwrap_or_default()),
            readout_row("HSL", move || readout().map(|r| r.hsl).unwrap_or_default()),
        ))
        .style(|s| s.gap(constants::GAP / 2.0).flex_grow(1.0)),
    ))
    .style(move |s| {
        let s = s.gap(constants::GAP).items_center();
        if readout().is_none() { s.hide() } else { s }
    })
}

fn readout_row(lbl: &'static str, text: impl Fn() -> String + Copy + 'static) -> impl IntoView {
    h_stack((
        label(move || lbl).style(|s| {
            s.width(28.0)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        label(text).style(|s| {
            s.flex_grow(1.0)
                .font_size(constants::READOUT_FONT)
                .font_family("monospace".to_string())
        }),
        copy_button(text),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if text.is_empty() {
        return;
    }
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                warn!("failed to copy color to clipboard: {err}");
            }
        }
        Err(err) => warn!("clipboard unavailable: {err}"),
    }
}
