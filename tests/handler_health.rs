mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shortlink::api::handlers::health_handler;

#[tokio::test]
async fn test_health_check() {
    let repository = common::scripted_repository(&[]);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state(repository.clone()));
    let server = TestServer::new(app).unwrap();

    common::seed_url(&repository, "https://one.com").await;
    common::seed_url(&repository, "https://two.com").await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["totalUrls"], 2);
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}
