//! In-memory implementation of [`UrlRepository`].
//!
//! Records live for the lifetime of the process; a restart clears everything.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{Registration, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Both lookup directions over one record set.
///
/// Invariant: `url_to_code[u] == c` if and only if `code_to_record[c].original_url == u`.
/// Only the methods below touch the maps, and always both of them under the
/// same write guard.
#[derive(Debug, Default)]
struct RegistryState {
    code_to_record: HashMap<String, UrlRecord>,
    url_to_code: HashMap<String, String>,
}

impl RegistryState {
    fn find_by_url(&self, url: &str) -> Option<&UrlRecord> {
        self.url_to_code
            .get(url)
            .and_then(|code| self.code_to_record.get(code))
    }

    fn insert(&mut self, record: UrlRecord) {
        self.url_to_code
            .insert(record.original_url.clone(), record.short_code.clone());
        self.code_to_record
            .insert(record.short_code.clone(), record);
    }

    fn remove(&mut self, code: &str) -> Option<UrlRecord> {
        let record = self.code_to_record.remove(code)?;
        self.url_to_code.remove(&record.original_url);
        Some(record)
    }
}

/// Process-local URL registry.
///
/// A single `RwLock` guards both indices, so get-or-create is serialized
/// across the whole registry and visit increments are linearizable. Guards
/// are held only for map access and are never held across an `.await`.
pub struct InMemoryUrlRepository {
    state: RwLock<RegistryState>,
    generator: Arc<dyn CodeGenerator>,
}

impl InMemoryUrlRepository {
    /// Creates an empty registry using cryptographically random codes.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(RandomCodeGenerator))
    }

    /// Creates an empty registry drawing codes from `generator`.
    pub fn with_generator(generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            generator,
        }
    }

    /// Takes the read guard; `failure` is the client-facing message if the lock is poisoned.
    fn read(&self, failure: &str) -> Result<RwLockReadGuard<'_, RegistryState>, AppError> {
        self.state
            .read()
            .map_err(|e| AppError::internal(failure, format!("registry lock poisoned: {e}")))
    }

    fn write(&self, failure: &str) -> Result<RwLockWriteGuard<'_, RegistryState>, AppError> {
        self.state
            .write()
            .map_err(|e| AppError::internal(failure, format!("registry lock poisoned: {e}")))
    }

    /// Draws candidates until one is not already in use.
    ///
    /// Unbounded: with a 64^8 code space a second draw is already rare.
    fn generate_unique_code(&self, state: &RegistryState) -> String {
        loop {
            let code = self.generator.generate();

            if !state.code_to_record.contains_key(&code) {
                return code;
            }

            tracing::warn!(code = %code, "Short code collision, retrying");
        }
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn get_or_create(&self, url: &str) -> Result<Registration, AppError> {
        if let Some(existing) = self.read("Failed to shorten URL")?.find_by_url(url) {
            return Ok(Registration {
                record: existing.clone(),
                is_new: false,
            });
        }

        let mut state = self.write("Failed to shorten URL")?;

        // Another caller may have registered the URL between the two guards.
        if let Some(existing) = state.find_by_url(url) {
            return Ok(Registration {
                record: existing.clone(),
                is_new: false,
            });
        }

        let code = self.generate_unique_code(&state);
        let record = UrlRecord::new(url.to_string(), code, Utc::now());
        state.insert(record.clone());

        tracing::debug!(code = %record.short_code, url = %record.original_url, "Registered URL");

        Ok(Registration {
            record,
            is_new: true,
        })
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .read("Failed to get URL")?
            .code_to_record
            .get(code)
            .cloned())
    }

    async fn record_visit(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let mut state = self.write("Failed to redirect to URL")?;

        let Some(record) = state.code_to_record.get_mut(code) else {
            return Ok(None);
        };

        record.visit_count = record.visit_count.saturating_add(1);
        tracing::debug!(code = %code, visits = record.visit_count, "Recorded visit");

        Ok(Some(record.clone()))
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let mut records: Vec<UrlRecord> = self
            .read("Failed to get URLs")?
            .code_to_record
            .values()
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.short_code.cmp(&b.short_code))
        });

        Ok(records)
    }

    async fn delete(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let removed = self.write("Failed to delete URL")?.remove(code);

        if let Some(record) = &removed {
            tracing::debug!(code = %code, url = %record.original_url, "Deleted URL");
        }

        Ok(removed)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.read("Failed to count URLs")?.code_to_record.len())
    }
}
