//! Repository implementations.
//!
//! - [`InMemoryUrlRepository`] - volatile URL registry; all data is lost on restart

pub mod memory_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
