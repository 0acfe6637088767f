//! # Consent Persistence
//!
//! The consent flag remembers that the user approved a connection, so a reload
//! can reconnect silently instead of adopting whatever account the wallet
//! happens to expose.
//!
//! - [`ConsentStorage`]: string key-value storage (`localStorage` in the browser)
//! - [`MemoryStorage`]: in-process storage for tests and non-browser hosts
//! - [`ConsentFlag`]: the boolean view over one key

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Value written when consent is granted. Anything else reads as "no consent".
pub const CONSENT_GRANTED: &str = "true";

/// Durable string key-value storage
pub trait ConsentStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: ConsentStorage + ?Sized> ConsentStorage for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory [`ConsentStorage`]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry, e.g. a consent flag left by a previous visit.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl ConsentStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Boolean consent flag stored under a fixed key
#[derive(Debug)]
pub struct ConsentFlag<S> {
    storage: S,
    key: String,
}

impl<S: ConsentStorage> ConsentFlag<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the flag. Unreadable storage counts as no consent.
    pub fn is_granted(&self) -> bool {
        match self.storage.get(&self.key) {
            Ok(value) => value.as_deref() == Some(CONSENT_GRANTED),
            Err(e) => {
                log::warn!("Failed to read consent flag '{}': {}", self.key, e);
                false
            }
        }
    }

    pub fn grant(&self) -> Result<(), StorageError> {
        self.storage.set(&self.key, CONSENT_GRANTED)
    }

    pub fn revoke(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl ConsentStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("localStorage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("localStorage disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("localStorage disabled".to_string()))
        }
    }

    #[test]
    fn test_grant_and_revoke() {
        let storage = Rc::new(MemoryStorage::new());
        let flag = ConsentFlag::new(storage.clone(), "walletConnected");
        assert!(!flag.is_granted());

        flag.grant().unwrap();
        assert!(flag.is_granted());
        assert_eq!(storage.get("walletConnected").unwrap().as_deref(), Some("true"));

        flag.revoke().unwrap();
        assert!(!flag.is_granted());
        assert_eq!(storage.get("walletConnected").unwrap(), None);
    }

    #[test]
    fn test_other_values_are_not_consent() {
        let flag = ConsentFlag::new(MemoryStorage::with_entry("walletConnected", "false"), "walletConnected");
        assert!(!flag.is_granted());

        let flag = ConsentFlag::new(MemoryStorage::with_entry("walletConnected", "TRUE"), "walletConnected");
        assert!(!flag.is_granted());
    }

    #[test]
    fn test_unreadable_storage_means_no_consent() {
        let flag = ConsentFlag::new(BrokenStorage, "walletConnected");
        assert!(!flag.is_granted());
        assert!(flag.grant().is_err());
    }
}
