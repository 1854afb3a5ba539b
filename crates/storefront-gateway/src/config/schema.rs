use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use storefront_core::error::{Result, StorefrontError};
use storefront_core::Product;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub instance: InstanceSection,

    /// `None` serves the built-in demo catalog.
    #[serde(default)]
    pub catalog: Option<Vec<Product>>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            instance: InstanceSection::default(),
            catalog: None,
        }
    }
}

impl StorefrontConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StorefrontError::UnsupportedVersion);
        }
        if matches!(&self.catalog, Some(products) if products.is_empty()) {
            return Err(StorefrontError::BadRequest("catalog must not be empty when set".into()));
        }

        self.server.validate()?;
        self.instance.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Root of the `/static` tree. `None` disables static serving.
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StorefrontError::BadRequest(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_static_dir() -> Option<PathBuf> {
    Some(PathBuf::from("static"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceSection {
    /// Overrides hostname resolution when set.
    #[serde(default)]
    pub id: Option<String>,
}

impl InstanceSection {
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.id, Some(id) if id.trim().is_empty()) {
            return Err(StorefrontError::BadRequest("instance.id must not be blank".into()));
        }
        Ok(())
    }
}
