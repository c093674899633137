use slidemenu_ui_graphics::Point;

pub type PointerId = u64;

/// Action carried by a pointer event.
///
/// Widgets that only track a single press treat anything other than
/// `Down`, `Move` and `Up` as unrecognized and leave it to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Pointer moving with no button pressed (mouse hover).
    Hover,
}

/// Pointer event positioned in the receiving widget's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub global_position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            global_position,
        }
    }

    /// Event whose local and global positions coincide.
    pub fn at(kind: PointerEventKind, x: f32, y: f32) -> Self {
        let position = Point::new(x, y);
        Self::new(kind, position, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Creates a copy of this event with a new local position.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self { position, ..*self }
    }
}
