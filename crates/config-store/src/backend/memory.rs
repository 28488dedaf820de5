//! In-memory key-value backend.
//!
//! Used by unit tests and local experiments. Cloning shares the underlying
//! map, so a test can keep a handle to inspect state the store mutated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::KvBackend;
use crate::error::BackendError;

#[derive(Default)]
struct State {
    entries: HashMap<String, String>,
    puts: usize,
}

/// A shared in-memory backend.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key before handing the backend to a store.
    ///
    /// Seeding does not count towards [`Self::put_count`].
    pub fn seed(&self, key: &str, value: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.entries.insert(key.to_string(), value.to_string());
        }
    }

    /// Raw stored value for a key, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state.lock().ok()?.entries.get(key).cloned()
    }

    /// Number of writes performed through [`KvBackend::put`].
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.state.lock().map(|state| state.puts).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, BackendError> {
        self.state
            .lock()
            .map_err(|_| BackendError::Unavailable("memory backend poisoned".to_string()))
    }
}

#[async_trait]
impl KvBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.lock()?.entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut state = self.lock()?;
        state.entries.insert(key.to_string(), value.to_string());
        state.puts += 1;
        Ok(())
    }
}
