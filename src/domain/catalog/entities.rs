//! Catalog entities
//!
//! Products and categories are defined once at startup from the catalog
//! seed and never mutated afterwards; everything here is read-only data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Category identifier (member of the fixed category set)
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Unit price, exact decimal
    #[schema(value_type = String, example = "89.90")]
    pub price: Decimal,
    /// Image URI
    pub image: String,
    /// Merchandising flag for the landing page's featured section
    #[serde(default)]
    pub featured: bool,
    /// Merchandising flag for the landing page's best-seller section
    #[serde(default)]
    pub best_seller: bool,
    /// Free-text tags, also searched by the catalog filter
    #[serde(default)]
    pub tags: Vec<String>,
    /// Named price variants, when the product is sold in more than one size
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// A named price variant of a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductVariant {
    /// Variant identifier, unique within the product
    pub id: String,
    /// Variant display name (e.g. "200ml")
    pub name: String,
    /// Variant price, exact decimal
    #[schema(value_type = String, example = "119.90")]
    pub price: Decimal,
}

/// One label from the fixed category set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Category identifier used for filtering (exact, case-sensitive match)
    pub id: String,
    /// Display label
    pub name: String,
}

impl Category {
    /// Sentinel selection meaning "no category filter"
    pub const ALL: &'static str = "all";
}
