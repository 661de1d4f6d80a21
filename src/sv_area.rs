//! Saturation/value surface.
//!
//! A fixed-size rectangle where x maps to saturation and y to value. The
//! surface is painted as the hue backdrop supplied by the picker state with
//! a static white/black overlay on top, so only a solid fill changes when
//! the hue moves. Pointer input is bounded to the surface before it is
//! reported.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::config::PickerConfig;
use crate::constants;
use crate::math;
use crate::state::{PickerState, Position};

/// Rasterize the overlay that turns a flat hue fill into the HSV plane.
///
/// Over a tint `T`, HSV is `v * (1 - s) + v * s * T`. A gray overlay with
/// alpha `1 - v * s` and level `v * (1 - s) / (1 - v * s)` composites to
/// exactly that.
fn rasterize_sv_overlay(size: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (size * size * 4) as usize];
    let last = (size - 1).max(1) as f64;
    for py in 0..size {
        let v = 1.0 - py as f64 / last;
        let row_offset = (py * size * 4) as usize;
        for px in 0..size {
            let s = px as f64 / last;
            let alpha = 1.0 - v * s;
            let level = if alpha <= 0.0 {
                0.0
            } else {
                v * (1.0 - s) / alpha
            };
            let c = math::channel_to_u8(level);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = c;
            buf[offset + 1] = c;
            buf[offset + 2] = c;
            buf[offset + 3] = math::channel_to_u8(alpha);
        }
    }
    buf
}

/// Bound a pointer in layout coordinates to the surface and convert it to
/// configured surface units.
///
/// The view may be laid out at a different size than configured; reported
/// positions always land in `[0, width] x [0, height]` of the config.
pub(crate) fn surface_position(
    pointer: Point,
    layout_width: f64,
    layout_height: f64,
    config: &PickerConfig,
) -> Option<Position> {
    if layout_width <= 0.0 || layout_height <= 0.0 {
        return None;
    }
    let x = (pointer.x / layout_width).clamp(0.0, 1.0) * config.width();
    let y = (pointer.y / layout_height).clamp(0.0, 1.0) * config.height();
    Some(Position::new(x, y))
}

struct SvUpdate {
    position: Position,
    backdrop: (u8, u8, u8),
}

pub(crate) struct SvArea {
    id: ViewId,
    held: bool,
    config: PickerConfig,
    position: Position,
    backdrop: (u8, u8, u8),
    size: floem::taffy::prelude::Size<f32>,
    on_change: Option<Box<dyn Fn(Position)>>,
    /// Cached overlay image; independent of hue, so rasterized once.
    overlay_img: Option<peniko::Image>,
    overlay_hash: Vec<u8>,
}

/// Creates the saturation/value surface reporting into `state`.
pub(crate) fn sv_area(state: RwSignal<PickerState>) -> SvArea {
    let id = ViewId::new();

    create_effect(move |_| {
        let st = state.get();
        id.update_state(SvUpdate {
            position: st.position(),
            backdrop: st.backdrop().to_rgb(),
        });
    });

    let initial = state.get_untracked();
    let config = *initial.config();

    SvArea {
        id,
        held: false,
        config,
        position: initial.position(),
        backdrop: initial.backdrop().to_rgb(),
        size: Default::default(),
        on_change: Some(Box::new(move |pos: Position| {
            state.update(|s| s.report_position(pos.x, pos.y));
        })),
        overlay_img: None,
        overlay_hash: Vec::new(),
    }
    .style(move |s| {
        s.width(config.width() as f32)
            .height(config.height() as f32)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl SvArea {
    fn update_from_pointer(&mut self, pos: Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if let Some(p) = surface_position(pos, w, h, &self.config) {
            self.position = p;
        }
    }

    fn report(&self) {
        if let Some(cb) = &self.on_change {
            cb(self.position);
        }
    }

    /// Marker center in layout coordinates.
    fn marker_point(&self) -> Point {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        Point::new(
            self.position.x / self.config.width() * w,
            self.position.y / self.config.height() * h,
        )
    }

    fn ensure_overlay_image(&mut self) {
        if self.overlay_img.is_some() {
            return;
        }

        let size = constants::SV_RASTER_SIZE;
        let pixels = rasterize_sv_overlay(size);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, size, size);

        self.overlay_hash = b"sv-overlay".to_vec();
        self.overlay_img = Some(img);
    }
}

impl View for SvArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SvUpdate>() {
            self.position = update.position;
            self.backdrop = update.backdrop;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.report();
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos);
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
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        let (r, g, b) = self.backdrop;
        cx.fill(&rect, Color::rgb8(r, g, b), 0.0);
        self.ensure_overlay_image();
        if let Some(ref img) = self.overlay_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.overlay_hash,
                },
                rect,
            );
        }
        cx.restore();

        let marker = self.marker_point();
        cx.stroke(
            &Circle::new(marker, constants::CURSOR_RADIUS + 1.0),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(marker, constants::CURSOR_RADIUS),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(marker, constants::CURSOR_RADIUS - 1.5),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PickerConfig {
        PickerConfig::new(627.0, 300.0).unwrap()
    }

    #[test]
    fn test_surface_position_inside() {
        let pos = surface_position(Point::new(313.5, 150.0), 627.0, 300.0, &config());
        assert_eq!(pos, Some(Position::new(313.5, 150.0)));
    }

    #[test]
    fn test_surface_position_clamps_to_bounds() {
        let config = config();
        let pos = surface_position(Point::new(-20.0, 900.0), 627.0, 300.0, &config);
        assert_eq!(pos, Some(Position::new(0.0, 300.0)));
        let pos = surface_position(Point::new(700.0, -1.0), 627.0, 300.0, &config);
        assert_eq!(pos, Some(Position::new(627.0, 0.0)));
    }

    #[test]
    fn test_surface_position_scales_layout() {
        let pos = surface_position(Point::new(50.0, 25.0), 100.0, 50.0, &config());
        assert_eq!(pos, Some(Position::new(313.5, 150.0)));
    }

    #[test]
    fn test_surface_position_without_layout() {
        assert_eq!(surface_position(Point::new(1.0, 1.0), 0.0, 10.0, &config()), None);
    }

    #[test]
    fn test_overlay_corners() {
        let size = 8;
        let buf = rasterize_sv_overlay(size);
        let px = |x: u32, y: u32| {
            let o = ((y * size + x) * 4) as usize;
            [buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]
        };
        // top-left: opaque white
        assert_eq!(px(0, 0), [255, 255, 255, 255]);
        // top-right: fully transparent, tint shows through
        assert_eq!(px(size - 1, 0)[3], 0);
        // bottom row: opaque black
        assert_eq!(px(0, size - 1), [0, 0, 0, 255]);
        assert_eq!(px(size - 1, size - 1), [0, 0, 0, 255]);
    }
}
