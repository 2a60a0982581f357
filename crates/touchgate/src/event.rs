//! Touch events.

use touchgate_geometry::Point;

/// The phase of a touch in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TouchPhase {
    /// A finger touched the screen.
    #[default]
    Started,
    /// A finger moved while touching.
    Moved,
    /// A finger was lifted.
    Ended,
    /// The system cancelled the touch.
    Cancelled,
}

/// A single touch event.
///
/// The position is in the coordinate space of the view being tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Identifier of the pointer that produced the event.
    pub id: u64,
    /// Where in its lifecycle the touch is.
    pub phase: TouchPhase,
    /// Position of the touch.
    pub position: Point,
}

impl TouchEvent {
    /// Create a touch-down event for pointer 0 at the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self::with_phase(0, TouchPhase::Started, Point::new(x, y))
    }

    /// Create a touch event with an explicit pointer id and phase.
    pub fn with_phase(id: u64, phase: TouchPhase, position: Point) -> Self {
        Self {
            id,
            phase,
            position,
        }
    }

    /// Horizontal coordinate of the touch.
    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical coordinate of the touch.
    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

impl From<Point> for TouchEvent {
    fn from(position: Point) -> Self {
        Self::with_phase(0, TouchPhase::Started, position)
    }
}
