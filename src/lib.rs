//! land-market - Client-side data stores for a land marketplace
//!
//! This crate is the state-management layer of a land marketplace front
//! end: property listings, buyer requirements, user auth, and activity
//! tracking, persisted as JSON through a local key-value adapter that
//! stands in for a real backend.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and filter logic
//! - **infra**: Key-value persistence adapter and backends
//! - **stores**: State owners the UI consumes (auth, properties,
//!   requirements, activity)
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use land_market::{Config, Stores};
//!
//! # async fn run() {
//! let stores = Stores::open(&Config::from_env());
//! let properties = stores.properties();
//! properties.fetch().await;
//! let hits = properties.search("Nashik").await;
//! # let _ = hits;
//! # }
//! ```
//!
//! Persistence is best-effort: adapter failures are logged and
//! downgraded, never thrown. Business-rule failures (invalid
//! credentials, duplicate registration, permission violations) surface
//! as [`AppError`] values with user-facing messages.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod stores;

// Re-export commonly used types at crate root
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::{JsonFileStore, KeyValueStore, KeyValueStoreExt, MemoryStore};
pub use stores::{ActivityTracker, AuthStore, PropertyStore, RequirementStore, Stores};
