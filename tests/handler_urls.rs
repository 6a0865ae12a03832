mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use shortlink::api::handlers::{delete_url_handler, list_urls_handler};
use shortlink::domain::repositories::UrlRepository;

fn urls_server(
    repository: std::sync::Arc<shortlink::prelude::InMemoryUrlRepository>,
) -> TestServer {
    let app = Router::new()
        .route("/api/urls", get(list_urls_handler))
        .route("/api/urls/{code}", delete(delete_url_handler))
        .with_state(common::create_test_state(repository));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_urls_empty() {
    let server = urls_server(common::scripted_repository(&[]));

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["totalUrls"], 0);
    assert_eq!(json["urls"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_urls_returns_all_records() {
    let repository = common::scripted_repository(&["first000", "second00"]);
    let server = urls_server(repository.clone());

    common::seed_url(&repository, "https://one.com").await;
    common::seed_url(&repository, "https://two.com").await;
    repository.record_visit("second00").await.unwrap();

    let json = server.get("/api/urls").await.json::<serde_json::Value>();

    assert_eq!(json["totalUrls"], 2);

    let urls = json["urls"].as_array().unwrap();
    let second = urls
        .iter()
        .find(|u| u["shortCode"] == "second00")
        .unwrap();
    assert_eq!(second["originalUrl"], "https://two.com");
    assert_eq!(second["shortUrl"], "http://localhost:3000/second00");
    assert_eq!(second["visitCount"], 1);
    assert!(second["createdAt"].is_string());
}

#[tokio::test]
async fn test_delete_url_success() {
    let repository = common::scripted_repository(&["delete00"]);
    let server = urls_server(repository.clone());

    common::seed_url(&repository, "https://example.com").await;

    let response = server.delete("/api/urls/delete00").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Short URL deleted successfully");
    assert_eq!(json["deletedUrl"], "https://example.com");

    assert!(repository.find_by_code("delete00").await.unwrap().is_none());
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_url_frees_original_url() {
    let repository = common::scripted_repository(&["old00000", "new00000"]);
    let server = urls_server(repository.clone());

    common::seed_url(&repository, "https://example.com").await;
    server.delete("/api/urls/old00000").await.assert_status_ok();

    let again = repository.get_or_create("https://example.com").await.unwrap();
    assert!(again.is_new);
    assert_eq!(again.record.short_code, "new00000");
}

#[tokio::test]
async fn test_delete_url_not_found() {
    let server = urls_server(common::scripted_repository(&[]));

    let response = server.delete("/api/urls/missing0").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Short URL not found"
    );
}
