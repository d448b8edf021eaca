//! Application setup and wiring

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::application::cart::CartService;
use crate::application::catalog::CatalogService;
use crate::config::Config;
use crate::domain::catalog::CatalogError;
use crate::infrastructure::catalog::ProductCatalog;
use crate::infrastructure::session::SessionStore;
use crate::presentation::controllers::AppState;
use crate::presentation::routes::create_router;

/// Handle returned from create_app for graceful shutdown coordination
pub struct AppHandle {
    pub router: Router,
    pub shutdown_token: CancellationToken,
}

/// Create the application router and return an AppHandle for shutdown coordination
pub fn create_app(config: Config) -> Result<AppHandle, CatalogError> {
    let config_arc = Arc::new(config);
    let shutdown_token = CancellationToken::new();

    // Load the immutable catalog: external seed when configured, otherwise
    // the one compiled into the binary.
    let catalog = match &config_arc.catalog.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog seed from file");
            Arc::new(ProductCatalog::from_path(path)?)
        }
        None => Arc::new(ProductCatalog::embedded()?),
    };
    tracing::info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog ready"
    );

    let store = SessionStore::new(Duration::from_secs(
        config_arc.cart.session_ttl_minutes * 60,
    ));
    let carts = Arc::new(CartService::new(
        catalog.clone(),
        store,
        Duration::from_millis(config_arc.cart.feedback_clear_ms),
        shutdown_token.clone(),
    ));

    let state = AppState {
        catalog: CatalogService::new(catalog),
        carts,
        config: config_arc.clone(),
        startup_time: Instant::now(),
    };

    let router = create_router(state, &config_arc);

    Ok(AppHandle {
        router,
        shutdown_token,
    })
}
