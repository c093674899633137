//! Draw primitives and the scope that collects them

use crate::{Brush, Color, IntRect, Point};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    /// Replaces the current clip; later primitives may draw anywhere inside it.
    Clip { rect: IntRect },
    Rect {
        rect: IntRect,
        brush: Brush,
    },
    Circle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    Text {
        rect: IntRect,
        text: String,
        color: Color,
    },
}

/// Sink for the primitives emitted by a render pass.
pub trait DrawScope {
    fn clip_rect(&mut self, rect: IntRect);
    fn draw_rect(&mut self, rect: IntRect, brush: Brush);
    fn draw_circle(&mut self, center: Point, radius: f32, brush: Brush);
    fn draw_text(&mut self, rect: IntRect, text: &str, color: Color);
}

/// Records primitives in order. Most frames emit a handful, so they stay inline.
#[derive(Default, Debug)]
pub struct DrawScopeDefault {
    primitives: SmallVec<[DrawPrimitive; 6]>,
}

impl DrawScopeDefault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives.into_vec()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl DrawScope for DrawScopeDefault {
    fn clip_rect(&mut self, rect: IntRect) {
        self.primitives.push(DrawPrimitive::Clip { rect });
    }

    fn draw_rect(&mut self, rect: IntRect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect { rect, brush });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.primitives.push(DrawPrimitive::Circle {
            center,
            radius,
            brush,
        });
    }

    fn draw_text(&mut self, rect: IntRect, text: &str, color: Color) {
        self.primitives.push(DrawPrimitive::Text {
            rect,
            text: text.to_string(),
            color,
        });
    }
}
