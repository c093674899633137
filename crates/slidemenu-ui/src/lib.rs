//! SlideMenu: a button that reveals left/right landing zones as the finger
//! slides away from it and reports which one the finger was released over.
//!
//! The widget owns its geometry and touch state; the host supplies density,
//! bounds and pointer events and draws the primitives it gets back.

pub mod widgets;

pub use widgets::slide_menu::*;

pub mod prelude {
    pub use crate::widgets::slide_menu::{
        SlideCallbacks, SlideMenu, SlideMenuConfig, SlideMenuGeometry, SlideMenuListener,
        SlideMenuMetrics, SlideMenuStyle, TouchState,
    };
}
