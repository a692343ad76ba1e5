//! Key-value storage collaborator seam (browser localStorage and friends).

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is corrupt: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode data: {0}")]
    Encode(#[source] serde_json::Error),
}

/// String key → string value persistence.
pub trait StorageProvider {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Volatile storage, for tests and non-browser hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut store = MemoryStorage::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "{\"a\":1}").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("{\"a\":1}"));
        store.remove("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
