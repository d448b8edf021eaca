//! Cart controllers
//!
//! Every endpoint resolves the session from the `vitrine_session` cookie,
//! refreshes the cookie on the way out and returns the full cart
//! representation so clients never have to track derived totals themselves.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::application::cart::{CartServiceError, CartView};
use crate::domain::cart::CartError;
use crate::domain::catalog::CatalogError;
use crate::presentation::controllers::AppState;
use crate::presentation::extractors::{SessionId, session_cookie};
use crate::presentation::models::{
    AddItemRequest, CartResponse, ErrorResponse, UpdateQuantityRequest,
};

/// Wrap a cart view into a response that also (re)pins the session cookie
fn cart_response(state: &AppState, status: StatusCode, view: CartView) -> Response {
    let cookie = session_cookie(view.session_id, state.config.cart.session_ttl_minutes);
    (
        status,
        [(header::SET_COOKIE, cookie)],
        Json(CartResponse::from(&view)),
    )
        .into_response()
}

/// GET /cart - Current cart for the session
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Current cart; a fresh empty cart when no session exists", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn get_cart(State(state): State<AppState>, SessionId(session): SessionId) -> Response {
    let view = state.carts.view(session).await;
    cart_response(&state, StatusCode::OK, view)
}

/// POST /cart/items - Add a product to the cart
#[utoipa::path(
    post,
    path = "/cart/items",
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Product added", body = CartResponse),
        (status = 400, description = "Quantity below 1", body = ErrorResponse),
        (status = 404, description = "Unknown product id", body = ErrorResponse)
    ),
    tag = "cart"
)]
pub async fn add_item(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Json(body): Json<AddItemRequest>,
) -> Response {
    match state
        .carts
        .add_item(session, &body.product_id, body.quantity)
        .await
    {
        Ok(view) => cart_response(&state, StatusCode::CREATED, view),
        Err(CartServiceError::Cart(err @ CartError::InvalidQuantity { .. })) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid_quantity", err.to_string())),
        )
            .into_response(),
        Err(CartServiceError::Catalog(err @ CatalogError::ProductNotFound { .. })) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("product_not_found", err.to_string())),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Failed to add product to cart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", "Internal server error")),
            )
                .into_response()
        }
    }
}

/// PUT /cart/items/{product_id} - Set a line's quantity.
///
/// A quantity of 0 or below removes the line; an id absent from the cart is
/// a no-op, matching the cart container semantics.
#[utoipa::path(
    put,
    path = "/cart/items/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product id")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated (or line removed)", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn update_item(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateQuantityRequest>,
) -> Response {
    let view = state
        .carts
        .update_quantity(session, &product_id, body.quantity)
        .await;
    cart_response(&state, StatusCode::OK, view)
}

/// DELETE /cart/items/{product_id} - Remove a line. No-op when absent.
#[utoipa::path(
    delete,
    path = "/cart/items/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Line removed (or was already absent)", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    SessionId(session): SessionId,
    Path(product_id): Path<String>,
) -> Response {
    let view = state.carts.remove_item(session, &product_id).await;
    cart_response(&state, StatusCode::OK, view)
}

/// DELETE /cart - Remove all lines. Idempotent; the panel flag is untouched.
#[utoipa::path(
    delete,
    path = "/cart",
    responses(
        (status = 200, description = "Cart cleared", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn clear_cart(State(state): State<AppState>, SessionId(session): SessionId) -> Response {
    let view = state.carts.clear(session).await;
    cart_response(&state, StatusCode::OK, view)
}

/// POST /cart/open - Show the slide-over cart panel
#[utoipa::path(
    post,
    path = "/cart/open",
    responses(
        (status = 200, description = "Panel flag set", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn open_cart(State(state): State<AppState>, SessionId(session): SessionId) -> Response {
    let view = state.carts.set_open(session, true).await;
    cart_response(&state, StatusCode::OK, view)
}

/// POST /cart/close - Hide the slide-over cart panel
#[utoipa::path(
    post,
    path = "/cart/close",
    responses(
        (status = 200, description = "Panel flag cleared", body = CartResponse)
    ),
    tag = "cart"
)]
pub async fn close_cart(State(state): State<AppState>, SessionId(session): SessionId) -> Response {
    let view = state.carts.set_open(session, false).await;
    cart_response(&state, StatusCode::OK, view)
}
