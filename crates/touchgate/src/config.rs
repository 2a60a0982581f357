//! Hit-test configuration.
//!
//! The configuration is an explicit value passed to every hit-test. It can be
//! built in code, seeded from the build profile, or read from TOML:
//!
//! ```
//! use touchgate::{HitTestConfig, ResolutionOrder};
//!
//! let config = HitTestConfig::from_toml_str(r#"
//! debug = true
//! order = "deepest-first"
//! "#)?;
//! assert!(config.debug);
//! assert_eq!(config.order, ResolutionOrder::DeepestFirst);
//! # Ok::<(), touchgate::ConfigError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logging::targets;

/// The order in which a view and its nested content are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionOrder {
    /// Try the view itself (debug only), then its first child, then its
    /// first grandchild. The first rectangle that contains the point wins.
    #[default]
    FirstHitWins,
    /// Test only the deepest candidate that exists: the first grandchild,
    /// else the first child, else the view itself. That single test decides.
    DeepestFirst,
}

/// Configuration for [`coordinates_inside_view`](crate::coordinates_inside_view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HitTestConfig {
    /// Debug mode. Under [`ResolutionOrder::FirstHitWins`] this enables the
    /// check against the view's own bounds before its content is tried.
    pub debug: bool,
    /// Resolution order for nested content.
    pub order: ResolutionOrder,
}

impl HitTestConfig {
    /// Create a configuration with debug mode off and the default order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration whose debug flag follows the build profile.
    pub fn for_build() -> Self {
        Self {
            debug: cfg!(debug_assertions),
            ..Self::default()
        }
    }

    /// Set debug mode.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the resolution order.
    pub fn with_order(mut self, order: ResolutionOrder) -> Self {
        self.order = order;
        self
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(target: targets::CONFIG, ?config, "parsed hit-test config");
        Ok(config)
    }

    /// Read a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
