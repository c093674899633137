//! Single-pointer touch tracking for the landing zones.

use super::layout_model::{LayoutModel, ZoneSide};
use super::listener::ListenerSlot;
use slidemenu_foundation::{PointerEvent, PointerEventKind};
use slidemenu_ui_graphics::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchState {
    #[default]
    Idle,
    LeftPending,
    RightPending,
}

impl TouchState {
    pub fn pending_zone(&self) -> Option<ZoneSide> {
        match self {
            TouchState::Idle => None,
            TouchState::LeftPending => Some(ZoneSide::Left),
            TouchState::RightPending => Some(ZoneSide::Right),
        }
    }

    fn from_zone(zone: Option<ZoneSide>) -> Self {
        match zone {
            None => TouchState::Idle,
            Some(ZoneSide::Left) => TouchState::LeftPending,
            Some(ZoneSide::Right) => TouchState::RightPending,
        }
    }
}

/// What the host should do after an event was offered to the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerResponse {
    /// False means the host should apply its own default handling.
    pub handled: bool,
    pub redraw: bool,
}

impl PointerResponse {
    pub const UNHANDLED: PointerResponse = PointerResponse {
        handled: false,
        redraw: false,
    };

    const fn handled(redraw: bool) -> Self {
        Self {
            handled: true,
            redraw,
        }
    }
}

#[derive(Debug, Default)]
pub struct TouchStateMachine {
    state: TouchState,
    start: Option<Point>,
}

impl TouchStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Global position of the last `Down`, kept for diagnostics.
    pub fn start_position(&self) -> Option<Point> {
        self.start
    }

    pub fn handle(
        &mut self,
        event: &PointerEvent,
        layout: &LayoutModel,
        listener: &mut ListenerSlot,
    ) -> PointerResponse {
        match event.kind {
            PointerEventKind::Down => {
                self.start = Some(event.global_position);
                log::debug!(
                    "SlideMenu pointer down at x = {}, y = {}",
                    event.global_position.x,
                    event.global_position.y
                );
                let redraw = self.state != TouchState::Idle;
                self.state = TouchState::Idle;
                PointerResponse::handled(redraw)
            }
            PointerEventKind::Move => {
                let (x, y) = event.position.to_pixel();
                let next = TouchState::from_zone(layout.zone_at(x, y));
                if next == self.state {
                    return PointerResponse::handled(false);
                }
                log::debug!("SlideMenu touch {:?} -> {:?}", self.state, next);
                self.state = next;
                PointerResponse::handled(true)
            }
            PointerEventKind::Up => {
                let released = std::mem::take(&mut self.state);
                match released.pending_zone() {
                    Some(side) => {
                        listener.fire(side);
                        PointerResponse::handled(true)
                    }
                    None => PointerResponse::handled(false),
                }
            }
            PointerEventKind::Cancel | PointerEventKind::Hover => PointerResponse::UNHANDLED,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/touch_tests.rs"]
mod tests;
