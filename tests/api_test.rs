mod common;

use axum::http::{Method, StatusCode};
use common::{read_json, ProductSeed, TestApp};
use serde_json::json;

#[tokio::test]
async fn health_reports_database_status() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
}

#[tokio::test]
async fn list_products_returns_views() {
    let app = TestApp::new().await;
    let store = app.seed_store("Happy Paws").await;
    app.seed_product(ProductSeed {
        store_id: Some(store.id),
        price: 32_000,
        ..ProductSeed::new(1, 1, "salmon kibble")
    })
    .await;

    let response = app
        .request(Method::GET, "/api/v1/products?animal=dog&category=food", None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_name"], "salmon kibble");
    assert_eq!(items[0]["store_name"], "Happy Paws");
    assert_eq!(items[0]["price"], 32_000);
}

#[tokio::test]
async fn list_products_with_no_match_is_an_empty_array() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::GET,
            "/api/v1/products?animal=small&category=equipment&search=wheel&sort_by=newest&page=2",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn unknown_tokens_are_bad_requests() {
    let app = TestApp::new().await;

    for uri in [
        "/api/v1/products?animal=bird&category=food",
        "/api/v1/products?animal=small&category=snack",
        "/api/v1/products?animal=dog&category=food&sort_by=rating",
        "/api/v1/products/popular?animal=cat&category=toys",
        "/api/v1/products/recommended?animal=fish",
        "/api/v1/products/most-purchased?animal=",
    ] {
        let response = app.request(Method::GET, uri, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = read_json(response).await;
        assert_eq!(body["error"], "Bad Request", "{uri}");
    }
}

#[tokio::test]
async fn malformed_requests_get_json_error_bodies() {
    let app = TestApp::new().await;
    let user = app.seed_user("mong").await;

    let cases = [
        (Method::GET, "/api/v1/products?animal=dog".to_string(), None, "invalid_query"),
        (
            Method::GET,
            "/api/v1/products?animal=dog&category=food&page=abc".to_string(),
            None,
            "invalid_query",
        ),
        (Method::GET, "/api/v1/products/abc".to_string(), None, "invalid_path"),
        (Method::GET, "/api/v1/users/abc/wishlist".to_string(), None, "invalid_path"),
        (
            Method::POST,
            format!("/api/v1/users/{}/wishlist", user.id),
            Some(json!({ "product_id": "seven" })),
            "invalid_body",
        ),
    ];

    for (method, uri, body, code) in cases {
        let response = app
            .request_with_headers(method, &uri, body, &[("x-request-id", "req-malformed")])
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = read_json(response).await;
        assert_eq!(body["error"], "Bad Request", "{uri}");
        assert_eq!(body["details"], code, "{uri}");
        assert_eq!(body["request_id"], "req-malformed", "{uri}");
    }
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/v1/products?animal=dog&category=food&page=0", None)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn popular_endpoint_orders_by_wishes() {
    let app = TestApp::new().await;
    for (name, wishes) in [("a", 2), ("b", 8), ("c", 5)] {
        app.seed_product(ProductSeed {
            wish_count: wishes,
            ..ProductSeed::new(2, 2, name)
        })
        .await;
    }

    let response = app
        .request(Method::GET, "/api/v1/products/popular?animal=cat&category=snack", None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["b", "c", "a"]);
}

#[tokio::test]
async fn grouped_endpoints_use_category_and_product_keys() {
    let app = TestApp::new().await;
    app.seed_product(ProductSeed::new(3, 2, "wheel")).await;

    let response = app
        .request(Method::GET, "/api/v1/products/recommended?animal=small", None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[1]["category"], "기구");
    assert_eq!(body[1]["product"][0]["product_name"], "wheel");

    let response = app
        .request(
            Method::GET,
            "/api/v1/products/most-purchased?animal=small-animal&user_id=5",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_product_is_not_found_with_request_id() {
    let app = TestApp::new().await;

    let response = app
        .request_with_headers(
            Method::GET,
            "/api/v1/products/4242",
            None,
            &[("x-request-id", "req-missing-product")],
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-missing-product"
    );
    let body = read_json(response).await;
    assert_eq!(body["request_id"], "req-missing-product");
    assert_eq!(body["message"], "Product 4242 does not exist");
}

#[tokio::test]
async fn get_product_returns_single_view() {
    let app = TestApp::new().await;
    let product = app.seed_product(ProductSeed::new(1, 6, "raincoat")).await;

    let response = app
        .request(Method::GET, &format!("/api/v1/products/{}", product.id), None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["id"], product.id);
    assert_eq!(body["product_category"], 6);
    assert!(body["store_name"].is_null());
}

#[tokio::test]
async fn navigation_lists_sections() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/navigation", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body[0]["id"], "dog");
    assert_eq!(body[2]["id"], "small");
    assert_eq!(body[2]["label"], "소동물");
    assert_eq!(body[2]["productCategory"].as_array().unwrap().len(), 3);
    assert_eq!(body[0]["productCategory"][0]["label"], "food");
    assert_eq!(body[0]["productCategory"][0]["value"], "사료");
}

#[tokio::test]
async fn wishlist_round_trip_over_http() {
    let app = TestApp::new().await;
    let user = app.seed_user("mong").await;
    let product = app.seed_product(ProductSeed::new(1, 2, "jerky")).await;
    let base = format!("/api/v1/users/{}/wishlist", user.id);

    let response = app
        .request(Method::POST, &base, Some(json!({ "product_id": product.id })))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["user_id"], user.id);
    assert_eq!(created["product_id"], product.id);

    let response = app
        .request(Method::POST, &base, Some(json!({ "product_id": product.id })))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app.request(Method::GET, &base, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    assert_eq!(listed[0]["wish_id"], created["id"]);
    assert_eq!(listed[0]["product"]["product_name"], "jerky");

    let item = format!("{base}/{}", product.id);
    let response = app.request(Method::DELETE, &item, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.request(Method::DELETE, &item, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request(Method::GET, &base, None).await;
    assert_eq!(read_json(response).await, json!([]));
}

#[tokio::test]
async fn wishlist_errors_map_to_statuses() {
    let app = TestApp::new().await;
    let user = app.seed_user("nabi").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/users/999/wishlist",
            Some(json!({ "product_id": 1 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/users/{}/wishlist", user.id),
            Some(json!({ "product_id": 0 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/users/{}/wishlist", user.id),
            Some(json!({ "product_id": 12345 })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Product 12345 does not exist");

    let response = app.request(Method::GET, "/api/v1/users/999/wishlist", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generated_request_id_is_echoed() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/v1/navigation", None).await;

    let header = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!header.is_empty());
}
