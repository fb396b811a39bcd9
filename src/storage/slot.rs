//! The named-slot persistence port.
//!
//! Mirrors the key-value string contract of web page storage: read a
//! string by key, write a string under a key, remove a key. Everything
//! above this trait works with JSON text and never sees the backend.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::errors::StorageError;

/// Key-value string persistence, one value per named slot.
pub trait SlotStore {
    /// Returns the stored value for `key`, or `Ok(None)` when the slot is empty.
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the slot for `key`. Removing an absent slot is not an error.
    fn remove_slot(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory slot store for tests and demos.
///
/// `set_available(false)` makes every operation fail with
/// [`StorageError::Unavailable`], standing in for a full or disabled
/// backend (the quota-exceeded case on real pages).
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
    available: Mutex<bool>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            available: Mutex::new(true),
        }
    }

    /// Toggles whether operations succeed. While unavailable, reads and
    /// writes both return [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        if let Ok(mut flag) = self.available.lock() {
            *flag = available;
        }
    }

    fn check_available(&self) -> Result<(), StorageError> {
        let available = self
            .available
            .lock()
            .map(|flag| *flag)
            .unwrap_or(false);
        if available {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "memory store is marked unavailable".to_string(),
            ))
        }
    }
}

impl Default for MemorySlotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_slot(&self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        slots.remove(key);
        Ok(())
    }
}
