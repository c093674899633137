//! Event sink for completed slides.

use super::layout_model::ZoneSide;
use std::fmt;

/// Receives the option the user released over.
pub trait SlideMenuListener {
    /// The user chose the left option.
    fn on_slide_left(&mut self);

    /// The user chose the right option.
    fn on_slide_right(&mut self);
}

/// Adapts a pair of closures into a [`SlideMenuListener`].
pub struct SlideCallbacks<L, R> {
    left: L,
    right: R,
}

impl<L, R> SlideCallbacks<L, R>
where
    L: FnMut(),
    R: FnMut(),
{
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> SlideMenuListener for SlideCallbacks<L, R>
where
    L: FnMut(),
    R: FnMut(),
{
    fn on_slide_left(&mut self) {
        (self.left)()
    }

    fn on_slide_right(&mut self) {
        (self.right)()
    }
}

/// Single-slot listener storage; the last registration wins.
#[derive(Default)]
pub struct ListenerSlot {
    listener: Option<Box<dyn SlideMenuListener>>,
}

impl ListenerSlot {
    pub fn set(&mut self, listener: Box<dyn SlideMenuListener>) {
        self.listener = Some(listener);
    }

    pub fn clear(&mut self) -> Option<Box<dyn SlideMenuListener>> {
        self.listener.take()
    }

    pub fn is_set(&self) -> bool {
        self.listener.is_some()
    }

    pub(crate) fn fire(&mut self, side: ZoneSide) {
        let Some(listener) = self.listener.as_mut() else {
            log::debug!("SlideMenu released over {:?} zone with no listener", side);
            return;
        };
        match side {
            ZoneSide::Left => listener.on_slide_left(),
            ZoneSide::Right => listener.on_slide_right(),
        }
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
