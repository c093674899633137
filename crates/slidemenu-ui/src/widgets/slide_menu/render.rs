//! Stateless drawing of a SlideMenu into a [`DrawScope`].

use super::config::SlideMenuConfig;
use super::layout_model::{SlideMenuGeometry, ZoneSide};
use super::touch::TouchState;
use slidemenu_ui_graphics::{Brush, Color, DrawScope, IntRect};

/// Paint values for one widget. Passed into [`render`] on every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideMenuStyle {
    pub background: Color,
    pub button: Color,
    pub left_zone: Color,
    pub right_zone: Color,
    pub text: Color,
}

impl Default for SlideMenuStyle {
    fn default() -> Self {
        Self {
            background: Color::from_rgba_u8(0xff, 0x40, 0x81, 0x30),
            button: Color::from_rgb_u8(0x30, 0x3f, 0x9f),
            left_zone: Color::from_rgb_u8(0x4c, 0xaf, 0x50),
            right_zone: Color::from_rgb_u8(0xf4, 0x43, 0x36),
            text: Color::WHITE,
        }
    }
}

impl SlideMenuStyle {
    fn zone_color(&self, side: ZoneSide) -> Color {
        match side {
            ZoneSide::Left => self.left_zone,
            ZoneSide::Right => self.right_zone,
        }
    }
}

/// Everything [`render`] reads, borrowed for one frame.
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    /// Bounds known to the host even before geometry is ready.
    pub bounds: IntRect,
    pub geometry: Option<&'a SlideMenuGeometry>,
    pub state: TouchState,
    pub config: &'a SlideMenuConfig,
    pub style: &'a SlideMenuStyle,
    /// Button outline width in device pixels.
    pub stroke_width: f32,
}

/// Emits the clip, background, button outline and the pending zone.
///
/// Without geometry only the button outline is drawn, and nothing at all
/// if the bounds are empty.
pub fn render<S: DrawScope + ?Sized>(input: &RenderInput<'_>, scope: &mut S) {
    let own = match input.geometry {
        Some(geometry) => {
            scope.clip_rect(geometry.clip);
            scope.draw_rect(geometry.clip, Brush::solid(input.style.background));
            geometry.own
        }
        None => input.bounds,
    };

    if own.is_empty() {
        return;
    }

    // Stroke is centered on the radius, so pull it in by half to stay inside own.
    let radius = (own.width().min(own.height()) as f32 / 2.0 - input.stroke_width / 2.0).max(0.0);
    scope.draw_circle(
        own.center(),
        radius,
        Brush::stroke(input.style.button, input.stroke_width),
    );

    let (Some(geometry), Some(side)) = (input.geometry, input.state.pending_zone()) else {
        return;
    };
    let zone = geometry.zone(side);
    if zone.is_empty() {
        return;
    }
    scope.draw_rect(zone, Brush::solid(input.style.zone_color(side)));

    let text = match side {
        ZoneSide::Left => &input.config.left_text,
        ZoneSide::Right => &input.config.right_text,
    };
    if !text.is_empty() {
        scope.draw_text(zone, text, input.style.text);
    }
}
