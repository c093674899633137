//! Testing utilities for SlideMenu

pub mod assertions;
pub mod gesture;

pub use assertions::*;
pub use gesture::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::gesture::GestureScript;
}
