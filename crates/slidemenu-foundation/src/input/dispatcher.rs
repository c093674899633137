//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue raw pointer events here and drain them on
//! the UI thread, translating each one into the target widget's local frame.

use super::types::{PointerEvent, PointerId};
use slidemenu_ui_graphics::Point;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<(PointerId, PointerEvent)>,
    origin: Point,
}

impl PointerDispatcher {
    /// Dispatcher for a widget whose local origin sits at `origin` in
    /// global coordinates.
    pub fn with_origin(origin: Point) -> Self {
        Self {
            queue: Vec::new(),
            origin,
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Hands queued events to `handler` in arrival order, localized against
    /// the current origin.
    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        let origin = self.origin;
        for (id, event) in self.queue.drain(..) {
            let local = Point::new(
                event.global_position.x - origin.x,
                event.global_position.y - origin.y,
            );
            log::trace!("dispatch pointer {id} {:?} at {:?}", event.kind, local);
            handler(id, event.copy_with_local_position(local));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerEventKind;

    #[test]
    fn drain_localizes_in_order() {
        let mut dispatcher = PointerDispatcher::with_origin(Point::new(100.0, 50.0));
        dispatcher.push(PointerEvent::at(PointerEventKind::Down, 110.0, 60.0));
        dispatcher.push(PointerEvent::at(PointerEventKind::Up, 90.0, 70.0).with_id(3));
        assert_eq!(dispatcher.len(), 2);

        let mut seen = Vec::new();
        dispatcher.drain(|id, event| seen.push((id, event.kind, event.position)));

        assert!(dispatcher.is_empty());
        assert_eq!(
            seen,
            vec![
                (0, PointerEventKind::Down, Point::new(10.0, 10.0)),
                (3, PointerEventKind::Up, Point::new(-10.0, 20.0)),
            ]
        );
    }
}
