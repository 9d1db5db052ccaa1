//! Catalog-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog definition: {0}")]
    Format(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
