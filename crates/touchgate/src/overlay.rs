//! Overlays shown above the navigation hierarchy and touch routing between them.
//!
//! Overlays are kept in show order; the last one shown is top-most. A touch
//! is offered to overlays from the top down:
//!
//! - if it lands inside an overlay's hit region, that overlay handles it;
//! - otherwise, if the overlay intercepts outside touches, it swallows it;
//! - otherwise it falls through to the next overlay.
//!
//! A touch nobody claims passes through to the content underneath.
//!
//! ```
//! use touchgate::{HitTestConfig, Overlay, OverlayManager, TouchDisposition, TouchEvent, View};
//! use touchgate_geometry::Rect;
//!
//! let mut overlays = OverlayManager::new(HitTestConfig::new());
//! let banner = View::container(
//!     Rect::from_ltrb(0.0, 0.0, 320.0, 640.0),
//!     [View::leaf(Rect::from_ltrb(0.0, 0.0, 320.0, 80.0))],
//! );
//! overlays.show(Overlay::new("banner", banner).intercept_touch_outside(false))?;
//!
//! assert!(matches!(
//!     overlays.dispatch_touch(&TouchEvent::new(10.0, 10.0)),
//!     TouchDisposition::Handled { .. }
//! ));
//! assert_eq!(
//!     overlays.dispatch_touch(&TouchEvent::new(10.0, 300.0)),
//!     TouchDisposition::PassThrough
//! );
//! # Ok::<(), touchgate::OverlayError>(())
//! ```

use std::fmt;

use crate::config::HitTestConfig;
use crate::error::OverlayError;
use crate::event::TouchEvent;
use crate::hit_test::{HitRegion, resolve_hit};
use crate::logging::{span_names, targets};
use crate::view::View;

/// Identifier of a shown overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(String);

impl OverlayId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OverlayId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An overlay and its touch options.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    root: View,
    intercept_touch_outside: bool,
}

impl Overlay {
    /// Create an overlay that intercepts touches outside its content.
    pub fn new(id: impl Into<OverlayId>, root: View) -> Self {
        Self {
            id: id.into(),
            root,
            intercept_touch_outside: true,
        }
    }

    /// Set whether touches outside the overlay's content are swallowed.
    pub fn intercept_touch_outside(mut self, intercept: bool) -> Self {
        self.intercept_touch_outside = intercept;
        self
    }

    pub fn id(&self) -> &OverlayId {
        &self.id
    }

    pub fn root(&self) -> &View {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut View {
        &mut self.root
    }

    pub fn intercepts_touch_outside(&self) -> bool {
        self.intercept_touch_outside
    }
}

/// What happened to a dispatched touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchDisposition {
    /// The touch landed on an overlay's content.
    Handled {
        overlay: OverlayId,
        region: HitRegion,
    },
    /// The touch missed an overlay's content but the overlay swallowed it.
    Intercepted(OverlayId),
    /// No overlay claimed the touch.
    PassThrough,
}

impl TouchDisposition {
    /// The overlay that claimed the touch, if any.
    pub fn overlay(&self) -> Option<&OverlayId> {
        match self {
            Self::Handled { overlay, .. } | Self::Intercepted(overlay) => Some(overlay),
            Self::PassThrough => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }
}

/// The stack of shown overlays.
#[derive(Debug, Default)]
pub struct OverlayManager {
    /// Bottom-most first.
    overlays: Vec<Overlay>,
    key: Option<OverlayId>,
    config: HitTestConfig,
}

impl OverlayManager {
    /// Create an empty manager that hit-tests with `config`.
    pub fn new(config: HitTestConfig) -> Self {
        Self {
            overlays: Vec::new(),
            key: None,
            config,
        }
    }

    pub fn config(&self) -> &HitTestConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: HitTestConfig) {
        self.config = config;
    }

    /// Show an overlay on top of all others.
    pub fn show(&mut self, overlay: Overlay) -> Result<(), OverlayError> {
        if self.contains(overlay.id()) {
            tracing::warn!(target: targets::OVERLAY, id = %overlay.id(), "overlay already shown");
            return Err(OverlayError::AlreadyShown(overlay.id.clone()));
        }
        tracing::debug!(
            target: targets::OVERLAY,
            id = %overlay.id(),
            intercept_touch_outside = overlay.intercept_touch_outside,
            depth = self.overlays.len(),
            "showing overlay"
        );
        self.overlays.push(overlay);
        Ok(())
    }

    /// Show an overlay on top of all others and make it the key overlay.
    pub fn show_as_key(&mut self, overlay: Overlay) -> Result<(), OverlayError> {
        let id = overlay.id.clone();
        self.show(overlay)?;
        self.key = Some(id);
        Ok(())
    }

    /// Make an already shown overlay the key overlay.
    pub fn set_key(&mut self, id: &OverlayId) -> Result<(), OverlayError> {
        if !self.contains(id) {
            tracing::warn!(target: targets::OVERLAY, %id, "cannot make unknown overlay key");
            return Err(OverlayError::NotFound(id.clone()));
        }
        tracing::debug!(target: targets::OVERLAY, %id, "overlay became key");
        self.key = Some(id.clone());
        Ok(())
    }

    /// Dismiss an overlay and return it.
    ///
    /// If the overlay was key, the key passes to the new top-most overlay.
    pub fn dismiss(&mut self, id: &OverlayId) -> Result<Overlay, OverlayError> {
        let index = self
            .overlays
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| OverlayError::NotFound(id.clone()))?;
        let overlay = self.overlays.remove(index);

        if self.key.as_ref() == Some(id) {
            self.key = self.overlays.last().map(|o| o.id.clone());
        }
        tracing::debug!(target: targets::OVERLAY, %id, key = ?self.key, "dismissed overlay");
        Ok(overlay)
    }

    /// Dismiss every overlay. Returns how many were dismissed.
    pub fn dismiss_all(&mut self) -> usize {
        let count = self.overlays.len();
        self.overlays.clear();
        self.key = None;
        tracing::debug!(target: targets::OVERLAY, count, "dismissed all overlays");
        count
    }

    /// Route a touch through the overlay stack, top-most first.
    pub fn dispatch_touch(&self, event: &TouchEvent) -> TouchDisposition {
        let _span = tracing::trace_span!(span_names::DISPATCH_TOUCH, id = event.id).entered();

        for overlay in self.overlays.iter().rev() {
            if let Some(region) = resolve_hit(event, Some(&overlay.root), &self.config) {
                tracing::trace!(target: targets::OVERLAY, id = %overlay.id, ?region, "handled");
                return TouchDisposition::Handled {
                    overlay: overlay.id.clone(),
                    region,
                };
            }
            if overlay.intercept_touch_outside {
                tracing::trace!(target: targets::OVERLAY, id = %overlay.id, "intercepted");
                return TouchDisposition::Intercepted(overlay.id.clone());
            }
        }

        TouchDisposition::PassThrough
    }

    pub fn contains(&self, id: &OverlayId) -> bool {
        self.overlays.iter().any(|o| &o.id == id)
    }

    pub fn get(&self, id: &OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| &o.id == id)
    }

    pub fn get_mut(&mut self, id: &OverlayId) -> Option<&mut Overlay> {
        self.overlays.iter_mut().find(|o| &o.id == id)
    }

    /// The key overlay, if one is set.
    pub fn key(&self) -> Option<&Overlay> {
        self.key.as_ref().and_then(|id| self.get(id))
    }

    /// The top-most overlay.
    pub fn top(&self) -> Option<&Overlay> {
        self.overlays.last()
    }

    /// Iterate over overlays, top-most first.
    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
