//! Catalog view logic
//!
//! The displayed subset of the catalog is a pure function of the full
//! collection, the selected category and the free-text query. There is no
//! hidden state: re-running the filter with the same inputs yields the same
//! output, which is the property the tests below pin down.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, Category, Product};
use crate::infrastructure::catalog::ProductCatalog;

/// How many same-category products the detail view suggests
const RELATED_LIMIT: usize = 4;

/// Category selection for the catalog filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// The `all` sentinel: no category filter
    All,
    /// Exact, case-sensitive match on a category id
    Category(String),
}

impl CategorySelection {
    /// Parse a query-parameter value; an absent parameter and the `all`
    /// sentinel both mean "no category filter".
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::All,
            Some(value) if value == Category::ALL => Self::All,
            Some(value) => Self::Category(value.to_string()),
        }
    }
}

/// Pure, order-preserving filter over the product collection.
///
/// A product passes the text filter when the lowercased query is a
/// substring of its lowercased name, description or brand, or of any tag.
/// Whitespace-only queries skip text filtering entirely.
pub fn filter_products<'a>(
    products: &'a [Arc<Product>],
    selection: &CategorySelection,
    query: &str,
) -> Vec<&'a Arc<Product>> {
    let query = query.trim().to_lowercase();

    products
        .iter()
        .filter(|product| match selection {
            CategorySelection::All => true,
            CategorySelection::Category(id) => product.category == *id,
        })
        .filter(|product| {
            if query.is_empty() {
                return true;
            }
            product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product.brand.to_lowercase().contains(&query)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// Read-side service over the immutable catalog
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<ProductCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    /// The displayed product list for a (category, query) pair
    pub fn browse(&self, selection: &CategorySelection, query: &str) -> Vec<Arc<Product>> {
        filter_products(self.catalog.all(), selection, query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.catalog.featured()
    }

    pub fn best_sellers(&self) -> Vec<Arc<Product>> {
        self.catalog.best_sellers()
    }

    /// A product plus up to four related products from the same category
    #[allow(clippy::type_complexity)]
    pub fn product_detail(
        &self,
        id: &str,
    ) -> Result<(Arc<Product>, Vec<Arc<Product>>), CatalogError> {
        let product = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound { id: id.to_string() })?;

        let related = self
            .catalog
            .by_category(&product.category)
            .into_iter()
            .filter(|p| p.id != product.id)
            .take(RELATED_LIMIT)
            .collect();

        Ok((product, related))
    }
}
