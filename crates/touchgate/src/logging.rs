//! Tracing targets used by touchgate.
//!
//! touchgate logs through the `tracing` crate and never installs a
//! subscriber itself. To see hit-test decisions, enable the `trace` level
//! for [`targets::HIT_TEST`]:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("touchgate::hit_test=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Hit-test resolution.
    pub const HIT_TEST: &str = "touchgate::hit_test";
    /// Overlay show/dismiss and touch routing.
    pub const OVERLAY: &str = "touchgate::overlay";
    /// Configuration loading.
    pub const CONFIG: &str = "touchgate::config";
}

/// Span names for the overlay dispatch path.
pub mod span_names {
    /// Routing one touch through the overlay stack.
    pub const DISPATCH_TOUCH: &str = "touchgate::dispatch_touch";
}
