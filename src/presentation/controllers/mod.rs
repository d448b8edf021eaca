//! HTTP controllers

pub mod cart;
pub mod catalog;
pub mod health;

use std::sync::Arc;
use std::time::Instant;

use crate::application::cart::CartService;
use crate::application::catalog::CatalogService;
use crate::config::Config;

/// Shared state for the storefront handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub carts: Arc<CartService>,
    pub config: Arc<Config>,
    pub startup_time: Instant,
}
