//! Error types for touchgate.
//!
//! Hit-testing itself never fails. Errors only come from loading
//! configuration and from managing overlays.

use std::path::PathBuf;

use thiserror::Error;

use crate::overlay::OverlayId;

/// Errors raised while loading a [`HitTestConfig`](crate::HitTestConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML or has unknown values.
    #[error("invalid hit-test config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by the [`OverlayManager`](crate::OverlayManager).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// An overlay with this id is already shown.
    #[error("overlay {0} is already shown")]
    AlreadyShown(OverlayId),

    /// No overlay with this id is shown.
    #[error("overlay {0} is not shown")]
    NotFound(OverlayId),
}

/// The main error type for touchgate operations.
#[derive(Error, Debug)]
pub enum TouchgateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),
}

/// A specialized Result type for touchgate operations.
pub type Result<T> = std::result::Result<T, TouchgateError>;
