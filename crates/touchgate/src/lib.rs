//! Touch hit-testing for navigation hosts.
//!
//! touchgate answers one question: did a touch land on a view's content?
//! Navigation hosts wrap screen content in one or two container layers, so
//! the answer looks at the view's first child and that child's first child,
//! and in debug builds also at the view itself.
//!
//! - [`coordinates_inside_view`] / [`resolve_hit`]: the hit-test itself
//! - [`HitTestConfig`]: debug flag and [`ResolutionOrder`], loadable from TOML
//! - [`ViewNode`] / [`ContainerNode`]: what the hit-test needs from a view
//! - [`OverlayManager`]: routes touches through a stack of overlays
//!
//! ```
//! use touchgate::{coordinates_inside_view, HitTestConfig, TouchEvent, View};
//! use touchgate_geometry::Rect;
//!
//! let screen = View::container(
//!     Rect::from_ltrb(0.0, 0.0, 100.0, 100.0),
//!     [View::leaf(Rect::from_ltrb(0.0, 0.0, 100.0, 40.0))],
//! );
//! let config = HitTestConfig::new();
//!
//! assert!(coordinates_inside_view(&TouchEvent::new(50.0, 20.0), Some(&screen), &config));
//! assert!(!coordinates_inside_view(&TouchEvent::new(50.0, 60.0), Some(&screen), &config));
//! assert!(!coordinates_inside_view(&TouchEvent::new(50.0, 20.0), None, &config));
//! ```
//!
//! Hit-testing holds no shared state and may be called from any thread.
//! [`OverlayManager`] is an ordinary owned value; keep it on the UI thread.

pub mod config;
mod error;
pub mod event;
pub mod logging;
pub mod overlay;
pub mod view;

pub use config::{HitTestConfig, ResolutionOrder};
pub use error::{ConfigError, OverlayError, Result, TouchgateError};
pub use event::{TouchEvent, TouchPhase};
pub use hit_test::{HitRegion, coordinates_inside_view, resolve_hit};
pub use overlay::{Overlay, OverlayId, OverlayManager, TouchDisposition};
pub use view::{ContainerNode, View, ViewNode};

// Re-export geometry so callers need only one dependency.
pub use touchgate_geometry as geometry;
