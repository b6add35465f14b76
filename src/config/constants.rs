//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage Keys
// =============================================================================

/// Key holding the persisted user table
pub const KEY_USERS: &str = "local_users";

/// Key holding the property collection
pub const KEY_PROPERTIES: &str = "properties";

/// Key holding the requirement collection
pub const KEY_REQUIREMENTS: &str = "requirements";

/// Key holding the append-only activity log
pub const KEY_ACTIVITIES: &str = "user_activities";

/// Key holding per-user preference documents
pub const KEY_PREFERENCES: &str = "user_preferences";

/// Key holding the session snapshot (user, token, authenticated flag)
pub const KEY_SESSION: &str = "auth_session";

// =============================================================================
// Storage Backend
// =============================================================================

/// Default data directory for the file-backed key-value store
pub const DEFAULT_DATA_DIR: &str = "./data";

/// File extension for persisted key-value entries
pub const STORE_FILE_EXTENSION: &str = "json";

// =============================================================================
// Simulated Latency
// =============================================================================

/// Default artificial delay applied to store operations, in milliseconds.
/// Emulates the latency of the real backend the stores stand in for.
pub const DEFAULT_LATENCY_MS: u64 = 300;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Minimum title length for a listing
pub const MIN_TITLE_LENGTH: u64 = 3;

/// Maximum title length for a listing
pub const MAX_TITLE_LENGTH: u64 = 200;

// =============================================================================
// Activity
// =============================================================================

/// Default number of activity records returned when no limit is given
pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;
