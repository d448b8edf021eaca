//! Route definitions and server setup

use std::time::Duration;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::presentation::controllers::{
    AppState,
    cart::{add_item, clear_cart, close_cart, get_cart, open_cart, remove_item, update_item},
    catalog::{get_product, home, list_categories, list_products},
    health::health_check,
};
use crate::presentation::models::*;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::controllers::catalog::home,
        crate::presentation::controllers::catalog::list_products,
        crate::presentation::controllers::catalog::get_product,
        crate::presentation::controllers::catalog::list_categories,
        crate::presentation::controllers::cart::get_cart,
        crate::presentation::controllers::cart::add_item,
        crate::presentation::controllers::cart::update_item,
        crate::presentation::controllers::cart::remove_item,
        crate::presentation::controllers::cart::clear_cart,
        crate::presentation::controllers::cart::open_cart,
        crate::presentation::controllers::cart::close_cart,
        crate::presentation::controllers::health::health_check
    ),
    components(
        schemas(
            ProductDto,
            ProductVariantDto,
            CategoryDto,
            HomeResponse,
            ProductListResponse,
            ProductDetailResponse,
            CategoryListResponse,
            CartLineDto,
            CartResponse,
            AddItemRequest,
            UpdateQuantityRequest,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "catalog", description = "Product catalog browsing and search endpoints"),
        (name = "cart", description = "Session-scoped shopping cart endpoints"),
        (name = "health", description = "System health monitoring endpoints")
    ),
    info(
        title = "Bem Me Faz Storefront API",
        version = "0.1.0",
        description = "Storefront service for the Bem Me Faz natural cosmetics shop: product catalog with category and free-text filtering, product detail with related products, and a session-scoped shopping cart.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the application router with the middleware stack
pub fn create_router(state: AppState, config: &Config) -> Router {
    let catalog_routes = Router::new()
        .route("/", get(home))
        .route("/products", get(list_products))
        .route("/product/{id}", get(get_product))
        .route("/categories", get(list_categories));

    let cart_routes = Router::new()
        .route("/cart", get(get_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route(
            "/cart/items/{product_id}",
            put(update_item).delete(remove_item),
        )
        .route("/cart/open", post(open_cart))
        .route("/cart/close", post(close_cart));

    let health_routes = Router::new().route("/health", get(health_check));

    // Build CORS layer from configuration
    let cors_layer =
        if config.server.allowed_origins.len() == 1 && config.server.allowed_origins[0] == "*" {
            CorsLayer::new()
                .allow_origin(tower_http::cors::AllowOrigin::mirror_request())
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
                .allow_credentials(false)
                .max_age(Duration::from_secs(3600))
        } else {
            let mut layer = CorsLayer::new();
            for origin in &config.server.allowed_origins {
                match axum::http::HeaderValue::from_str(origin) {
                    Ok(origin_header) => {
                        layer = layer.allow_origin(origin_header);
                    }
                    Err(_) => {
                        tracing::warn!(%origin, "Invalid CORS origin in config; skipping");
                    }
                }
            }
            layer
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
                .allow_credentials(true)
                .max_age(Duration::from_secs(3600))
        };

    let mut router = Router::new()
        .merge(catalog_routes)
        .merge(cart_routes)
        .merge(health_routes);

    // Conditionally expose Swagger UI (avoid leaking docs in production).
    if config.server.enable_docs {
        router =
            router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    let service_builder = ServiceBuilder::new()
        // HTTP tracing
        .layer(TraceLayer::new_for_http())
        // CORS handling
        .layer(cors_layer)
        // Global request timeout
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )));

    router.layer(service_builder).with_state(state)
}
