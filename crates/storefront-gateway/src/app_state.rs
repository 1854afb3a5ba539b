//! Shared application state for the storefront.
//!
//! Everything a handler touches is constructed here once and injected into
//! the router via `with_state`; there are no process globals. Tests build
//! their own state from fixtures with [`AppState::new`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use storefront_core::error::{Result, StorefrontError};
use storefront_core::Catalog;

use crate::config::StorefrontConfig;
use crate::instance;
use crate::obs::StoreMetrics;
use crate::render::{BuiltinPages, PageRenderer};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<StoreMetrics>,
    renderer: Arc<dyn PageRenderer>,
}

struct AppStateInner {
    catalog: Catalog,
    instance_id: String,
    static_dir: Option<PathBuf>,
}

impl AppState {
    /// Build state from explicit parts.
    /// Returns Result so metric registration failures reach `main` instead of panicking.
    pub fn new(
        catalog: Catalog,
        instance_id: impl Into<String>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Result<Self> {
        Self::build(catalog, instance_id.into(), renderer, None)
    }

    /// Build state from a validated config: configured or demo catalog,
    /// resolved instance identity, built-in pages.
    pub fn from_config(cfg: &StorefrontConfig) -> Result<Self> {
        let catalog = match &cfg.catalog {
            Some(products) => Catalog::new(products.clone())?,
            None => Catalog::demo(),
        };
        let instance_id = instance::resolve(cfg.instance.id.as_deref());

        Self::build(
            catalog,
            instance_id,
            Arc::new(BuiltinPages::new()),
            cfg.server.static_dir.clone(),
        )
    }

    fn build(
        catalog: Catalog,
        instance_id: String,
        renderer: Arc<dyn PageRenderer>,
        static_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let metrics = StoreMetrics::new()
            .map_err(|e| StorefrontError::Internal(format!("metrics registry init failed: {e}")))?;

        Ok(Self {
            inner: Arc::new(AppStateInner { catalog, instance_id, static_dir }),
            metrics: Arc::new(metrics),
            renderer,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn instance_id(&self) -> &str {
        &self.inner.instance_id
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.inner.static_dir.as_deref()
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }
}
