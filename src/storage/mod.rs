//! Shoptrail storage layer.
//!
//! Persistence is a named-slot key-value contract: the recency list lives
//! under a single slot key as a JSON string. [`SlotStore`] is the port,
//! [`SqliteSlotStore`] the durable backend, [`MemorySlotStore`] the
//! in-memory implementation used in tests and demos.
//!
//! # Usage
//!
//! ```no_run
//! use shoptrail::storage::{SlotStore, SqliteSlotStore};
//!
//! // Open a persistent store
//! let store = SqliteSlotStore::open("shoptrail.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = SqliteSlotStore::open_in_memory().expect("failed to open in-memory store");
//!
//! let value = store.read_slot("recentlyViewedProducts");
//! ```

pub mod migrations;
pub mod slot;
pub mod sqlite;

pub use slot::{MemorySlotStore, SlotStore};
pub use sqlite::SqliteSlotStore;
