use axum::{Json, Router, http::StatusCode, routing::{get, post}};
use serde_json::{Value, json};
use storefront_cart::StorefrontClient;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_load_products() {
    let app = Router::new().route(
        "/json/product.json",
        get(|| async {
            Json(json!([
                {"id": "1", "title": "Granule", "price": "1200", "category": "Hrana"},
                {"id": 2, "title": "Povodac", "price": 990}
            ]))
        }),
    );
    let client = StorefrontClient::new(serve(app).await).unwrap();

    let products = client.load_products().await;
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category.as_deref(), Some("Hrana"));
    assert_eq!(products[1].id, "2");
}

#[tokio::test]
async fn test_load_products_http_error_is_empty() {
    let app = Router::new().route(
        "/json/product.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = StorefrontClient::new(serve(app).await).unwrap();

    assert!(client.try_load_products().await.is_err());
    assert!(client.load_products().await.is_empty());
}

#[tokio::test]
async fn test_fetch_images_batch() {
    let app = Router::new().route(
        "/api/product-images/batch",
        post(|Json(body): Json<Value>| async move {
            let ids = body["productIds"].as_array().cloned().unwrap_or_default();
            let results: serde_json::Map<String, Value> = ids
                .iter()
                .filter_map(Value::as_str)
                .map(|id| {
                    (
                        id.to_string(),
                        json!([{"url": format!("https://cdn.example/{id}.jpg"), "public_id": id, "width": 1, "height": 1}]),
                    )
                })
                .collect();
            Json(json!({ "results": results }))
        }),
    );
    let client = StorefrontClient::new(serve(app).await).unwrap();

    let results = client
        .fetch_images_batch(&["p1".to_string(), "p2".to_string()])
        .await;
    assert_eq!(results.len(), 2);
    assert_eq!(results["p2"][0].url, "https://cdn.example/p2.jpg");
}

#[tokio::test]
async fn test_fetch_images_batch_error_body_is_empty() {
    let app = Router::new().route(
        "/api/product-images/batch",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"code": 2, "message": "Product IDs array is required"})),
            )
        }),
    );
    let client = StorefrontClient::new(serve(app).await).unwrap();

    let results = client.fetch_images_batch(&["p1".to_string()]).await;
    assert!(results.is_empty());
    assert!(client.fetch_images_batch(&[]).await.is_empty());
}
