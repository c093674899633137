//! Pointer input plumbing shared by SlideMenu hosts and widgets.

pub mod input;

pub use input::*;

pub mod prelude {
    pub use crate::input::prelude::*;
}
