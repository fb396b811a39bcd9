//! Recency Manager for shoptrail.
//!
//! Implements `RecencyManagerTrait`: recording product views, loading the
//! persisted list, and clearing it, backed by a [`SlotStore`] slot holding
//! a JSON array of [`ProductRecord`]s.

use log::warn;

use crate::storage::SlotStore;
use crate::types::errors::StorageError;
use crate::types::product::{ProductId, ProductRecord};

/// Trait defining recency list operations.
pub trait RecencyManagerTrait {
    fn record_view(&mut self, product: &ProductRecord) -> Result<(), StorageError>;
    fn load(&self) -> Vec<ProductRecord>;
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Recency manager backed by a slot store.
///
/// The list invariants hold after every `record_view`: most recent first,
/// at most one entry per product id, never longer than `max_products`.
pub struct RecencyManager<'a, S: SlotStore> {
    store: &'a S,
    slot_key: String,
    max_products: usize,
}

impl<'a, S: SlotStore> RecencyManager<'a, S> {
    /// Creates a new `RecencyManager` over the provided store.
    ///
    /// `max_products` of zero keeps the list permanently empty; views are
    /// still accepted, they just never survive the truncation.
    pub fn new(store: &'a S, slot_key: &str, max_products: usize) -> Self {
        Self {
            store,
            slot_key: slot_key.to_string(),
            max_products,
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn max_products(&self) -> usize {
        self.max_products
    }

    /// Number of entries currently persisted.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, S: SlotStore> RecencyManagerTrait for RecencyManager<'a, S> {
    /// Records a product view at the front of the list.
    ///
    /// Any previous entry with the same id is dropped first, then the list
    /// is truncated to `max_products`. The repeat-view case therefore moves
    /// the product to the front without growing the list.
    ///
    /// Starts from whatever `load` returns, so a corrupt slot is replaced
    /// with a fresh single-entry list rather than failing the view.
    fn record_view(&mut self, product: &ProductRecord) -> Result<(), StorageError> {
        let mut list = self.load();
        list.retain(|entry| entry.id != product.id);
        list.insert(0, product.clone());
        list.truncate(self.max_products);

        let json = serde_json::to_string(&list)?;
        self.store.write_slot(&self.slot_key, &json)
    }

    /// Loads the persisted list, most recent first.
    ///
    /// Fail-closed: an unreadable slot or undecodable payload yields an
    /// empty list and a warning, never an error. The widget renders its
    /// empty state instead of breaking the page.
    fn load(&self) -> Vec<ProductRecord> {
        let raw = match self.store.read_slot(&self.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Error retrieving recently viewed products: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ProductRecord>>(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!("Error retrieving recently viewed products: {}", err);
                Vec::new()
            }
        }
    }

    /// Clears the persisted list by removing the slot entirely.
    fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove_slot(&self.slot_key)
    }
}

/// Returns `records` with the given product id filtered out.
///
/// Identity is type-strict id equality, so a numeric id never matches its
/// string form. Order of the remaining entries is preserved.
pub fn excluding_product(records: &[ProductRecord], current: &ProductId) -> Vec<ProductRecord> {
    records
        .iter()
        .filter(|record| &record.id != current)
        .cloned()
        .collect()
}
