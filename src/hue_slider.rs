//! Hue slider (0–360°).
//!
//! Renders the hue spectrum at full saturation and value as a rasterized
//! image, scaled to the track rather than redrawn on resize. The slider only
//! relays pointer input: the thumb is drawn from the hue the picker state
//! hands back.

use std::sync::Arc;

use bigcolor::color_space;
use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::config::MAX_HUE;
use crate::constants;
use crate::state::PickerState;

/// Rasterize a one-row hue spectrum: 0° on the left, 360° on the right.
fn rasterize_hue_spectrum(width: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let rgb = color_space::hsv_to_rgb(t as f32, 1.0, 1.0);
        let offset = (px * 4) as usize;
        buf[offset] = rgb.r;
        buf[offset + 1] = rgb.g;
        buf[offset + 2] = rgb.b;
        buf[offset + 3] = 255;
    }
    buf
}

/// Map a pointer x on a track of `width` to a whole hue.
///
/// The thumb center travels between `THUMB_RADIUS` and `width - THUMB_RADIUS`;
/// anything outside that span pins to 0 or 360. Returns `None` while the
/// track is too narrow to hold the thumb.
pub(crate) fn hue_from_pointer(x: f64, width: f64) -> Option<u16> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return None;
    }
    let t = ((x - r) / usable).clamp(0.0, 1.0);
    Some((t * MAX_HUE as f64).round() as u16)
}

/// Inverse of [`hue_from_pointer`]: where the thumb center sits for `hue`.
fn thumb_x(hue: u16, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + (hue as f64 / MAX_HUE as f64) * (width - 2.0 * r)
}

struct HueUpdate(u16);

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hue: u16,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(u16)>>,
    /// Cached spectrum image, rasterized once at a fixed resolution.
    spectrum_img: Option<peniko::Image>,
    spectrum_hash: Vec<u8>,
}

/// Creates a horizontal hue slider reporting into `state`.
pub(crate) fn hue_slider(state: RwSignal<PickerState>) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = state.get().hue();
        id.update_state(HueUpdate(h));
    });

    HueSlider {
        id,
        held: false,
        hue: state.get_untracked().hue(),
        size: Default::default(),
        on_change: Some(Box::new(move |h| {
            state.update(|s| s.report_hue(h));
        })),
        spectrum_img: None,
        spectrum_hash: Vec::new(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        if let Some(h) = hue_from_pointer(x, self.size.width as f64) {
            self.hue = h;
        }
    }

    fn report(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.hue);
        }
    }

    fn ensure_spectrum_image(&mut self) {
        if self.spectrum_img.is_some() {
            return;
        }

        let width = constants::HUE_RASTER_WIDTH;
        let pixels = rasterize_hue_spectrum(width);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, width, 1);

        self.spectrum_hash = b"hue-spectrum".to_vec();
        self.spectrum_img = Some(img);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<HueUpdate>() {
            self.hue = update.0;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.report();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.report();
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_spectrum_image();
        if let Some(ref img) = self.spectrum_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.spectrum_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &floem::kurbo::Stroke::new(1.0));

        let radius = constants::THUMB_RADIUS;
        let center = (thumb_x(self.hue, w), h / 2.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 3.0),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_from_pointer_ends() {
        let r = constants::THUMB_RADIUS;
        assert_eq!(hue_from_pointer(r, 374.0), Some(0));
        assert_eq!(hue_from_pointer(374.0 - r, 374.0), Some(360));
        assert_eq!(hue_from_pointer(187.0, 374.0), Some(180));
    }

    #[test]
    fn test_hue_from_pointer_clamps_outside_track() {
        assert_eq!(hue_from_pointer(-50.0, 374.0), Some(0));
        assert_eq!(hue_from_pointer(1000.0, 374.0), Some(360));
    }

    #[test]
    fn test_hue_from_pointer_narrow_track() {
        assert_eq!(hue_from_pointer(3.0, constants::THUMB_RADIUS * 2.0), None);
    }

    #[test]
    fn test_thumb_round_trip() {
        for hue in [0, 1, 90, 359, 360] {
            let x = thumb_x(hue, 500.0);
            assert_eq!(hue_from_pointer(x, 500.0), Some(hue));
        }
    }

    #[test]
    fn test_spectrum_starts_and_ends_red() {
        let buf = rasterize_hue_spectrum(constants::HUE_RASTER_WIDTH);
        assert_eq!(&buf[0..4], &[255, 0, 0, 255]);
        let last = buf.len() - 4;
        assert_eq!(&buf[last..], &[255, 0, 0, 255]);
    }
}
