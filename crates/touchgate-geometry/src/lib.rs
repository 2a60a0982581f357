//! Geometry primitives for touchgate.
//!
//! This crate holds the small set of value types the hit-tester works with:
//! [`Point`], [`Size`] and [`Rect`]. Rectangles are half-open: the left and
//! top edges belong to the rectangle, the right and bottom edges do not.
//!
//! ```
//! use touchgate_geometry::{Point, Rect};
//!
//! let bounds = Rect::from_ltrb(0.0, 0.0, 100.0, 100.0);
//! assert!(bounds.contains(Point::new(0.0, 0.0)));
//! assert!(!bounds.contains(Point::new(100.0, 50.0)));
//! ```

mod types;

pub use types::{Point, Rect, Size};
