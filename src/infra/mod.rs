//! Infrastructure layer - Persistence adapter
//!
//! Wraps the durable key-value backends the stores persist to. Every
//! failure at this boundary is logged and downgraded to a sentinel value;
//! persistence is best-effort, not authoritative.

pub mod kv;

pub use kv::{JsonFileStore, KeyValueStore, KeyValueStoreExt, MemoryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use kv::MockKeyValueStore;
