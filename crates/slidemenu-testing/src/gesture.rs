//! Scripted pointer gestures
//!
//! Builds the event sequence a finger would produce, so tests and demos can
//! replay a slide without a window:
//!
//! ```
//! use slidemenu_testing::GestureScript;
//!
//! let events = GestureScript::press(28.0, 28.0)
//!     .move_to(-10.0, 40.0)
//!     .release();
//! assert_eq!(events.len(), 3);
//! ```

use slidemenu_foundation::{PointerEvent, PointerEventKind, PointerId};
use slidemenu_ui_graphics::Point;

#[derive(Clone, Debug)]
pub struct GestureScript {
    id: PointerId,
    origin: Point,
    last: Point,
    events: Vec<PointerEvent>,
}

impl GestureScript {
    /// Starts a gesture with a `Down` at the local position.
    pub fn press(x: f32, y: f32) -> Self {
        Self::press_with_origin(Point::ZERO, x, y)
    }

    /// Like [`press`](Self::press) for a widget placed at `origin` on screen;
    /// global positions are offset by it.
    pub fn press_with_origin(origin: Point, x: f32, y: f32) -> Self {
        let mut script = Self {
            id: 0,
            origin,
            last: Point::new(x, y),
            events: Vec::new(),
        };
        script.push(PointerEventKind::Down, x, y);
        script
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        for event in &mut self.events {
            event.id = id;
        }
        self
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.push(PointerEventKind::Move, x, y);
        self
    }

    /// Moves in `steps` evenly spaced events ending at the target.
    pub fn drag_to(mut self, x: f32, y: f32, steps: u32) -> Self {
        let steps = steps.max(1);
        let start = self.last;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.push(
                PointerEventKind::Move,
                start.x + (x - start.x) * t,
                start.y + (y - start.y) * t,
            );
        }
        self
    }

    /// Ends with `Up` at the last position.
    pub fn release(mut self) -> Vec<PointerEvent> {
        let Point { x, y } = self.last;
        self.push(PointerEventKind::Up, x, y);
        self.events
    }

    /// Ends with `Cancel` at the last position.
    pub fn cancel(mut self) -> Vec<PointerEvent> {
        let Point { x, y } = self.last;
        self.push(PointerEventKind::Cancel, x, y);
        self.events
    }

    fn push(&mut self, kind: PointerEventKind, x: f32, y: f32) {
        let position = Point::new(x, y);
        let global = Point::new(x + self.origin.x, y + self.origin.y);
        self.last = position;
        self.events
            .push(PointerEvent::new(kind, position, global).with_id(self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_interpolates_to_target() {
        let events = GestureScript::press_with_origin(Point::new(100.0, 0.0), 0.0, 0.0)
            .with_id(7)
            .drag_to(10.0, -20.0, 2)
            .release();

        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Move,
                PointerEventKind::Up,
            ]
        );
        assert_eq!(events[1].position, Point::new(5.0, -10.0));
        assert_eq!(events[3].position, Point::new(10.0, -20.0));
        assert_eq!(events[3].global_position, Point::new(110.0, -20.0));
        assert!(events.iter().all(|e| e.id == 7));
    }
}
