// Shoptrail state managers
// Managers handle stateful operations over the storage slot.

pub mod recency_manager;
