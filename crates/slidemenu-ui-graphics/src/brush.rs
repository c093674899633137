//! Brush definitions for painting

use crate::color::Color;

/// How a primitive is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Outline only, `width` in device pixels.
    Stroke { color: Color, width: f32 },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Brush::Stroke { color, width }
    }

    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(color) | Brush::Stroke { color, .. } => *color,
        }
    }
}
