//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analytics;
pub mod fallback;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod urls;

pub use analytics::analytics_handler;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use urls::{delete_url_handler, list_urls_handler};
