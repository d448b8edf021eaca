//! In-memory product catalog
//!
//! The catalog is loaded once at startup, either from the seed compiled
//! into the binary or from an external JSON file with the same schema, and
//! is immutable afterwards. Accessors are plain scans: the collection holds
//! dozens of items and the data never changes, so no caching or indexing
//! beyond the id lookup table is warranted.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::catalog::{CatalogError, Category, Product};

/// Catalog seed compiled into the binary
const EMBEDDED_SEED: &str = include_str!("../../data/products.json");

/// Schema of a catalog seed document
#[derive(Debug, Deserialize)]
struct CatalogSeed {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// The process-wide, read-only product catalog
pub struct ProductCatalog {
    products: Vec<Arc<Product>>,
    by_id: HashMap<String, usize>,
    categories: Vec<Category>,
}

impl ProductCatalog {
    /// Build the catalog from the embedded seed
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_seed_str(EMBEDDED_SEED)
    }

    /// Build the catalog from an external JSON seed file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_seed_str(&raw)
    }

    /// Build the catalog from a JSON seed document
    pub fn from_seed_str(raw: &str) -> Result<Self, CatalogError> {
        let CatalogSeed {
            categories,
            products,
        } = serde_json::from_str(raw)?;

        let mut by_id = HashMap::with_capacity(products.len());
        let mut owned = Vec::with_capacity(products.len());

        for product in products {
            if product.price.is_sign_negative() {
                return Err(CatalogError::NegativePrice { id: product.id });
            }
            if !categories.iter().any(|c| c.id == product.category) {
                return Err(CatalogError::UnknownCategory {
                    id: product.id,
                    category: product.category,
                });
            }
            if by_id.insert(product.id.clone(), owned.len()).is_some() {
                return Err(CatalogError::DuplicateProduct { id: product.id });
            }
            owned.push(Arc::new(product));
        }

        Ok(Self {
            products: owned,
            by_id,
            categories,
        })
    }

    /// All products, in catalog order
    pub fn all(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by id; `None` for absent ids, never a panic
    pub fn get(&self, id: &str) -> Option<&Arc<Product>> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    /// Products of one category, in catalog order.
    ///
    /// The `all` sentinel returns the whole catalog, mirroring how the
    /// category filter treats it.
    pub fn by_category(&self, category: &str) -> Vec<Arc<Product>> {
        if category == Category::ALL {
            return self.products.to_vec();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products flagged for the featured section, in catalog order
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Products flagged as best sellers, in catalog order
    pub fn best_sellers(&self) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.best_seller)
            .cloned()
            .collect()
    }

    /// The fixed category set, including the `all` pseudo-entry used by
    /// clients to render the unfiltered tab
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
