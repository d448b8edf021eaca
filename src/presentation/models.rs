//! Storefront DTOs for API requests and responses

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::cart::CartView;
use crate::domain::cart::CartLine;
use crate::domain::catalog::{Category, Product, ProductVariant};
use crate::presentation::format::format_brl;

/// Product DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    /// Product identifier
    #[schema(example = "1")]
    pub id: String,
    /// Display name
    #[schema(example = "Sérum Facial Hidratante")]
    pub name: String,
    /// Brand name
    #[schema(example = "Bem Me Faz")]
    pub brand: String,
    /// Category identifier
    #[schema(example = "skincare")]
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Exact decimal price
    #[schema(value_type = String, example = "89.90")]
    pub price: Decimal,
    /// Price formatted for display in the pt-BR currency convention
    #[schema(example = "R$ 89,90")]
    pub price_display: String,
    /// Image URI
    pub image: String,
    /// Featured-section merchandising flag
    pub featured: bool,
    /// Best-seller-section merchandising flag
    pub best_seller: bool,
    /// Free-text tags
    pub tags: Vec<String>,
    /// Named price variants
    pub variants: Vec<ProductVariantDto>,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price: product.price,
            price_display: format_brl(product.price),
            image: product.image.clone(),
            featured: product.featured,
            best_seller: product.best_seller,
            tags: product.tags.clone(),
            variants: product.variants.iter().map(ProductVariantDto::from).collect(),
        }
    }
}

/// Product variant DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductVariantDto {
    pub id: String,
    /// Variant display name (e.g. "200ml")
    pub name: String,
    /// Exact decimal price
    #[schema(value_type = String, example = "119.90")]
    pub price: Decimal,
    /// Price formatted for display
    #[schema(example = "R$ 119,90")]
    pub price_display: String,
}

impl From<&ProductVariant> for ProductVariantDto {
    fn from(variant: &ProductVariant) -> Self {
        Self {
            id: variant.id.clone(),
            name: variant.name.clone(),
            price: variant.price,
            price_display: format_brl(variant.price),
        }
    }
}

/// Category DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    /// Category identifier used in the `category` filter parameter
    #[schema(example = "corpo")]
    pub id: String,
    /// Display label
    #[schema(example = "Corpo")]
    pub name: String,
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
        }
    }
}

/// Landing page sections
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub featured: Vec<ProductDto>,
    pub best_sellers: Vec<ProductDto>,
}

/// Catalog listing with the echoed filter inputs
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    /// Products matching the filter, in catalog order
    pub products: Vec<ProductDto>,
    /// Number of matching products
    pub total: usize,
    /// Echoed category selection (`all` when unfiltered)
    #[schema(example = "all")]
    pub category: String,
    /// Echoed text query
    pub query: String,
    /// The fixed category set, for rendering filter tabs
    pub categories: Vec<CategoryDto>,
}

/// Product detail plus related products from the same category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailResponse {
    pub product: ProductDto,
    pub related: Vec<ProductDto>,
}

/// The fixed category set
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDto>,
}

/// One cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartLineDto {
    pub product: ProductDto,
    /// Units of this product in the cart, always >= 1
    #[schema(example = 2)]
    pub quantity: u32,
    /// Unit price times quantity, exact decimal
    #[schema(value_type = String, example = "179.80")]
    pub line_total: Decimal,
    /// Line total formatted for display
    #[schema(example = "R$ 179,80")]
    pub line_total_display: String,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        Self {
            product: ProductDto::from(line.product.as_ref()),
            quantity: line.quantity,
            line_total: line.line_total(),
            line_total_display: format_brl(line.line_total()),
        }
    }
}

/// Full cart representation returned by every cart endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    /// Session id, also carried by the session cookie
    pub session_id: Uuid,
    /// Slide-over panel visibility flag
    pub open: bool,
    /// Id of the most recently added product; cleared automatically
    pub just_added: Option<String>,
    /// Lines in insertion order
    pub lines: Vec<CartLineDto>,
    /// Sum of quantities across all lines
    #[schema(example = 3)]
    pub item_count: u64,
    /// Sum of price x quantity over all lines, exact decimal
    #[schema(value_type = String, example = "229.70")]
    pub subtotal: Decimal,
    /// Subtotal formatted for display
    #[schema(example = "R$ 229,70")]
    pub subtotal_display: String,
}

impl From<&CartView> for CartResponse {
    fn from(view: &CartView) -> Self {
        let subtotal = view.cart.subtotal();
        Self {
            session_id: view.session_id,
            open: view.cart.is_open(),
            just_added: view.just_added.clone(),
            lines: view.cart.lines().iter().map(CartLineDto::from).collect(),
            item_count: view.cart.item_count(),
            subtotal,
            subtotal_display: format_brl(subtotal),
        }
    }
}

/// Add-to-cart request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddItemRequest {
    /// Catalog product id
    #[schema(example = "1")]
    pub product_id: String,
    /// Units to add, must be >= 1
    #[schema(example = 2, minimum = 1)]
    pub quantity: u32,
}

/// Quantity update request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// New quantity; 0 or negative removes the line
    #[schema(example = 3)]
    pub quantity: i64,
}

/// Structured error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    #[schema(example = "product_not_found")]
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    pub uptime_seconds: u64,
    /// Approximate number of live cart sessions
    pub active_sessions: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
