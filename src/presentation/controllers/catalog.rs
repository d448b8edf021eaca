//! Catalog controllers: landing sections, listing, detail, categories

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Deserialize;

use crate::application::catalog::CategorySelection;
use crate::domain::catalog::Category;
use crate::presentation::controllers::AppState;
use crate::presentation::models::{
    CategoryDto, CategoryListResponse, HomeResponse, ProductDetailResponse, ProductDto,
    ProductListResponse,
};

/// Query parameters of the catalog listing
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Category id, or the `all` sentinel; absent means unfiltered
    pub category: Option<String>,
    /// Free-text query over name, description, brand and tags
    pub q: Option<String>,
}

/// GET / - Landing page: featured and best-seller sections
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page sections", body = HomeResponse)
    ),
    tag = "catalog"
)]
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        featured: state
            .catalog
            .featured()
            .iter()
            .map(|p| ProductDto::from(p.as_ref()))
            .collect(),
        best_sellers: state
            .catalog
            .best_sellers()
            .iter()
            .map(|p| ProductDto::from(p.as_ref()))
            .collect(),
    })
}

/// GET /products - Catalog listing with optional category and text filter
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("category" = Option<String>, Query, description = "Category id, or `all` for no filter"),
        ("q" = Option<String>, Query, description = "Free-text query over name, description, brand and tags")
    ),
    responses(
        (status = 200, description = "Filtered catalog listing, original order preserved", body = ProductListResponse)
    ),
    tag = "catalog"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductsQuery>,
) -> Json<ProductListResponse> {
    let selection = CategorySelection::parse(params.category.as_deref());
    let query = params.q.unwrap_or_default();

    let products: Vec<ProductDto> = state
        .catalog
        .browse(&selection, &query)
        .iter()
        .map(|p| ProductDto::from(p.as_ref()))
        .collect();

    let category = match &selection {
        CategorySelection::All => Category::ALL.to_string(),
        CategorySelection::Category(id) => id.clone(),
    };

    Json(ProductListResponse {
        total: products.len(),
        products,
        category,
        query,
        categories: state.catalog.categories().iter().map(CategoryDto::from).collect(),
    })
}

/// GET /product/{id} - Product detail with related products.
///
/// An unknown id redirects to the catalog listing instead of surfacing an
/// error page.
#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product detail", body = ProductDetailResponse),
        (status = 303, description = "Unknown product id; redirect to /products")
    ),
    tag = "catalog"
)]
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.product_detail(&id) {
        Ok((product, related)) => Json(ProductDetailResponse {
            product: ProductDto::from(product.as_ref()),
            related: related
                .iter()
                .map(|p| ProductDto::from(p.as_ref()))
                .collect(),
        })
        .into_response(),
        Err(_) => {
            tracing::debug!(product = %id, "Product not found, redirecting to catalog");
            Redirect::to("/products").into_response()
        }
    }
}

/// GET /categories - The fixed category set
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category list", body = CategoryListResponse)
    ),
    tag = "catalog"
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: state.catalog.categories().iter().map(CategoryDto::from).collect(),
    })
}
