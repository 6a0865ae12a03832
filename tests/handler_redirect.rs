mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::redirect_handler;
use shortlink::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let repository = common::scripted_repository(&["redirect"]);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    common::seed_url(&repository, "https://example.com/target").await;

    let response = server.get("/redirect").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_increments_visit_count() {
    let repository = common::scripted_repository(&["counted0"]);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    common::seed_url(&repository, "https://example.com").await;

    for _ in 0..3 {
        server.get("/counted0").await;
    }

    let record = repository.find_by_code("counted0").await.unwrap().unwrap();
    assert_eq!(record.visit_count, 3);
}

#[tokio::test]
async fn test_redirect_target_is_byte_equal() {
    let repository = common::scripted_repository(&["exact000"]);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    let original = "https://www.example.com/path?q=1";
    common::seed_url(&repository, original).await;

    let response = server.get("/exact000").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location").as_bytes(), original.as_bytes());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let repository = common::scripted_repository(&[]);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/nonexist").await;

    assert_eq!(response.status_code(), 404);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short URL not found");
    assert_eq!(json["message"], "The requested short URL does not exist");
}

#[tokio::test]
async fn test_redirect_after_delete_not_found() {
    let repository = common::scripted_repository(&["gone0000"]);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    common::seed_url(&repository, "https://example.com").await;
    repository.delete("gone0000").await.unwrap();

    let response = server.get("/gone0000").await;
    assert_eq!(response.status_code(), 404);
}
