//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Link service backed by the in-memory registry.
pub type AppLinkService = LinkService<InMemoryUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public base for short URLs; derived from the request when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryUrlRepository>, base_url: Option<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            base_url,
        }
    }
}
