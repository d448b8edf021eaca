//! Application Layer - Catalog view logic and cart orchestration

pub mod cart;
pub mod catalog;

pub use cart::{CartService, CartServiceError, CartView};
pub use catalog::{CatalogService, CategorySelection, filter_products};
