//! Registry settings, loaded from a TOML file.
//!
//! ```toml
//! reject_duplicate_type_codes = true
//! eager_namespaces = ["crm"]
//! ```

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Fail when two model types share a type code instead of letting
    /// type-code lookup return whichever it finds first.
    pub reject_duplicate_type_codes: bool,
    /// Namespaces bootstrapped by [`MetadataRegistry::with_config`](crate::MetadataRegistry::with_config).
    pub eager_namespaces: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_type_codes: true,
            eager_namespaces: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| RegistryError::Config(e.to_string()))
    }

    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing, unreadable or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No registry config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded registry config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse registry config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read registry config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
