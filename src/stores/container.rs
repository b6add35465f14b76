//! Store container - wires every store over one shared backend.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{JsonFileStore, KeyValueStore};

use super::activity::ActivityTracker;
use super::auth::AuthStore;
use super::property::PropertyStore;
use super::requirement::RequirementStore;

/// Container holding the application's store instances.
///
/// Each store is constructed once and shared by reference; the backend
/// is process-wide state every store persists into, with each store
/// owning its own keys.
pub struct Stores<S: KeyValueStore> {
    auth: Arc<AuthStore<S>>,
    properties: Arc<PropertyStore<S>>,
    requirements: Arc<RequirementStore<S>>,
    tracker: Arc<ActivityTracker<S>>,
}

impl Stores<JsonFileStore> {
    /// Production wiring: a file-backed store under the configured data
    /// directory.
    pub fn open(config: &Config) -> Self {
        let backend = Arc::new(JsonFileStore::open(config.data_dir.clone()));
        Self::with_backend(backend, config)
    }
}

impl<S: KeyValueStore> Stores<S> {
    /// Wire all stores over an injected backend.
    pub fn with_backend(backend: Arc<S>, config: &Config) -> Self {
        let auth = Arc::new(AuthStore::new(backend.clone(), config));
        let properties = Arc::new(PropertyStore::new(backend.clone(), config));
        let requirements = Arc::new(RequirementStore::new(backend.clone(), config));
        let tracker = Arc::new(ActivityTracker::new(backend, properties.clone()));

        Self {
            auth,
            properties,
            requirements,
            tracker,
        }
    }

    /// Auth store
    pub fn auth(&self) -> Arc<AuthStore<S>> {
        self.auth.clone()
    }

    /// Property store
    pub fn properties(&self) -> Arc<PropertyStore<S>> {
        self.properties.clone()
    }

    /// Requirement store
    pub fn requirements(&self) -> Arc<RequirementStore<S>> {
        self.requirements.clone()
    }

    /// Activity/preference tracker
    pub fn tracker(&self) -> Arc<ActivityTracker<S>> {
        self.tracker.clone()
    }
}
