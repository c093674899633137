//! Pure math/data for drawing & units in SlideMenu
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! draw primitives and the millimeter/pixel unit conversions used by the
//! widget crates.

mod brush;
mod color;
mod draw;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, DrawScopeDefault};
    pub use crate::geometry::{IntRect, IntSize, Point};
    pub use crate::unit::{mm_to_px, Density, Mm};
}
