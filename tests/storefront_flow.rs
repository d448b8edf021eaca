//! End-to-end storefront flow over the public router

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use vitrine::Config;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn session_cookie_of(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("cart response must set the session cookie")
        .to_string()
}

fn add_item(cookie: Option<&str>, product_id: &str, quantity: i64) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/cart/items")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(
            serde_json::json!({ "product_id": product_id, "quantity": quantity }).to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn a_shopping_session_keeps_its_cart_across_requests() {
    let app = vitrine::create_app(Config::default()).unwrap().router;

    // Browse the catalog, pick the serum from the skincare tab
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/products?category=skincare")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listing = body_json(response).await;
    assert_eq!(listing["products"][0]["id"], "1");

    // Two units of the serum, one hair mask
    let response = app.clone().oneshot(add_item(None, "1", 2)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie_of(&response);

    let response = app
        .clone()
        .oneshot(add_item(Some(&cookie), "3", 1))
        .await
        .unwrap();
    let cart = body_json(response).await;
    assert_eq!(cart["item_count"], 3);
    assert_eq!(cart["subtotal"], "229.70");
    assert_eq!(cart["subtotal_display"], "R$ 229,70");

    // The cart survives a plain re-read with the same cookie
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/cart")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let cart = body_json(response).await;
    assert_eq!(cart["item_count"], 3);
    assert_eq!(cart["lines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sessions_are_isolated_from_each_other() {
    let app = vitrine::create_app(Config::default()).unwrap().router;

    let response = app.clone().oneshot(add_item(None, "1", 1)).await.unwrap();
    let first_cookie = session_cookie_of(&response);

    let response = app.clone().oneshot(add_item(None, "4", 2)).await.unwrap();
    let second_cookie = session_cookie_of(&response);
    assert_ne!(first_cookie, second_cookie);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/cart")
                .header(header::COOKIE, &first_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let cart = body_json(response).await;
    assert_eq!(cart["item_count"], 1);
    assert_eq!(cart["lines"][0]["product"]["id"], "1");
}
