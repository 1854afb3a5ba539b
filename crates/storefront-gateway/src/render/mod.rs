//! Page rendering seam.
//!
//! Handlers hand a template name and a JSON data mapping to a
//! [`PageRenderer`]; the renderer returns the finished HTML document.
//! [`BuiltinPages`] ships the two storefront templates.

mod builtin;

use thiserror::Error;

pub use builtin::BuiltinPages;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const PRODUCT_TEMPLATE: &str = "product.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("template {template} context invalid: {source}")]
    Context {
        template: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait PageRenderer: Send + Sync {
    fn render(&self, template: &str, ctx: &serde_json::Value) -> Result<String, RenderError>;
}
