//! Catalog domain errors

use std::path::PathBuf;

use thiserror::Error;

/// Catalog-specific domain errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Failed to read catalog seed {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog seed: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Duplicate product id in catalog seed: {id}")]
    DuplicateProduct { id: String },

    #[error("Product {id} references unknown category: {category}")]
    UnknownCategory { id: String, category: String },

    #[error("Product {id} has a negative price")]
    NegativePrice { id: String },
}
