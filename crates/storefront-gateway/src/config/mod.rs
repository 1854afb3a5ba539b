//! Storefront config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use storefront_core::error::{Result, StorefrontError};

pub use schema::{InstanceSection, ServerSection, StorefrontConfig};

/// Looked up in the working directory when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "storefront.yaml";

pub fn load_from_file(path: &str) -> Result<StorefrontConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StorefrontError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<StorefrontConfig> {
    let cfg: StorefrontConfig = serde_yaml::from_str(s)
        .map_err(|e| StorefrontError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Explicit path wins; otherwise `storefront.yaml` if present; otherwise defaults.
pub fn resolve(explicit: Option<&str>) -> Result<StorefrontConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        None => Ok(StorefrontConfig::default()),
    }
}
