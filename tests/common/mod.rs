#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use shortlink::infrastructure::persistence::InMemoryUrlRepository;
use shortlink::routes::build_router;
use shortlink::state::AppState;
use shortlink::utils::code_generator::SequenceCodeGenerator;

pub const BASE_URL: &str = "http://localhost:3000";

/// Registry that hands out `codes` in order, then random codes.
pub fn scripted_repository(codes: &[&str]) -> Arc<InMemoryUrlRepository> {
    Arc::new(InMemoryUrlRepository::with_generator(Arc::new(
        SequenceCodeGenerator::new(codes.iter().map(|c| c.to_string())),
    )))
}

pub fn create_test_state(repository: Arc<InMemoryUrlRepository>) -> AppState {
    AppState::new(repository, Some(BASE_URL.to_string()))
}

/// Full application (all routes, fallbacks and middleware) over `repository`.
pub fn create_test_server(repository: Arc<InMemoryUrlRepository>) -> TestServer {
    let app = build_router(create_test_state(repository), 30);
    TestServer::new(app).unwrap()
}

pub async fn seed_url(repository: &InMemoryUrlRepository, url: &str) -> String {
    use shortlink::domain::repositories::UrlRepository;

    repository
        .get_or_create(url)
        .await
        .unwrap()
        .record
        .short_code
}
