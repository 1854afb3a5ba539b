//! Shared error type across storefront crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Catalog data rejected at construction.
    InvalidCatalog,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidCatalog => "INVALID_CATALOG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: i64, reason: String },
    #[error("duplicate product id: {0}")]
    DuplicateProductId(i64),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StorefrontError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StorefrontError::BadRequest(_) => ClientCode::BadRequest,
            StorefrontError::InvalidProduct { .. } | StorefrontError::DuplicateProductId(_) => {
                ClientCode::InvalidCatalog
            }
            StorefrontError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StorefrontError::Internal(_) => ClientCode::Internal,
        }
    }
}
