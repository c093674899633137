//! Measurement contracts for SlideMenu

mod constraints;

pub use constraints::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
}
