//! Requirement store - owns the canonical and filtered requirement
//! collections. Same lifecycle shape as the property store, for buyer
//! requirements instead of listings.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::config::{Config, KEY_REQUIREMENTS};
use crate::domain::{NewRequirement, Requirement, RequirementPatch};
use crate::errors::AppResult;
use crate::infra::{KeyValueStore, KeyValueStoreExt};

use super::seed::SEED_REQUIREMENTS;

#[derive(Default)]
struct RequirementState {
    requirements: Vec<Requirement>,
    filtered: Vec<Requirement>,
    loading: bool,
}

/// Store owning the requirement collections, persisted under the
/// `requirements` key.
pub struct RequirementStore<S: KeyValueStore> {
    backend: Arc<S>,
    latency: Duration,
    state: RwLock<RequirementState>,
}

impl<S: KeyValueStore> RequirementStore<S> {
    /// Create a store over the given backend
    pub fn new(backend: Arc<S>, config: &Config) -> Self {
        Self {
            backend,
            latency: Duration::from_millis(config.simulated_latency_ms),
            state: RwLock::new(RequirementState::default()),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn persist(&self, requirements: &[Requirement]) {
        self.backend.set_json(KEY_REQUIREMENTS, &requirements);
    }

    /// Load the persisted collection, seeding the built-in dataset on
    /// first run. Idempotent without intervening mutation.
    pub async fn fetch(&self) -> Vec<Requirement> {
        self.state.write().await.loading = true;
        self.simulate_latency().await;

        let requirements: Vec<Requirement> = match self.backend.get_json(KEY_REQUIREMENTS) {
            Some(stored) => stored,
            None => {
                let seed = SEED_REQUIREMENTS.clone();
                tracing::info!(count = seed.len(), "Seeding requirement collection");
                self.persist(&seed);
                seed
            }
        };

        let mut state = self.state.write().await;
        state.requirements = requirements.clone();
        state.filtered = requirements.clone();
        state.loading = false;
        requirements
    }

    /// Post a requirement for a user. Assigns id, creation timestamp,
    /// and a zero response counter; prepends to both views and persists.
    pub async fn add(&self, user_id: Uuid, data: NewRequirement) -> AppResult<Requirement> {
        self.state.write().await.loading = true;
        let result = self.add_inner(user_id, data).await;
        self.state.write().await.loading = false;
        result
    }

    async fn add_inner(&self, user_id: Uuid, data: NewRequirement) -> AppResult<Requirement> {
        data.validate()?;

        let requirement = Requirement::from_submission(user_id, data);
        let mut state = self.state.write().await;
        state.requirements.insert(0, requirement.clone());
        state.filtered.insert(0, requirement.clone());
        self.persist(&state.requirements);

        tracing::debug!(id = %requirement.id, "Requirement posted");
        Ok(requirement)
    }

    /// Merge a patch into the requirement with the given id, in both
    /// views. An unmatched id is a silent no-op and returns `None`.
    pub async fn update(&self, id: Uuid, patch: RequirementPatch) -> Option<Requirement> {
        let mut state = self.state.write().await;
        let updated = match state.requirements.iter_mut().find(|r| r.id == id) {
            Some(requirement) => {
                patch.apply(requirement);
                requirement.clone()
            }
            None => return None,
        };
        if let Some(view) = state.filtered.iter_mut().find(|r| r.id == id) {
            *view = updated.clone();
        }
        self.persist(&state.requirements);
        Some(updated)
    }

    /// Remove a requirement from both views. Removing an unknown id is
    /// a no-op.
    pub async fn delete(&self, id: Uuid) {
        let mut state = self.state.write().await;
        let before = state.requirements.len();
        state.requirements.retain(|r| r.id != id);
        state.filtered.retain(|r| r.id != id);
        if state.requirements.len() != before {
            self.persist(&state.requirements);
            tracing::debug!(id = %id, "Requirement deleted");
        }
    }

    /// Free-text search over purpose, location fields, and timeline.
    /// An empty or whitespace-only query restores the full collection.
    pub async fn search(&self, query: &str) -> Vec<Requirement> {
        let query = query.trim();
        let mut state = self.state.write().await;
        let filtered: Vec<Requirement> = if query.is_empty() {
            state.requirements.clone()
        } else {
            state
                .requirements
                .iter()
                .filter(|r| r.matches_query(query))
                .cloned()
                .collect()
        };
        state.filtered = filtered.clone();
        filtered
    }

    /// Bump the response counter. Unknown id is a no-op.
    pub async fn record_response(&self, id: Uuid) {
        let mut state = self.state.write().await;
        let updated = match state.requirements.iter_mut().find(|r| r.id == id) {
            Some(requirement) => {
                requirement.responses += 1;
                requirement.clone()
            }
            None => return,
        };
        if let Some(view) = state.filtered.iter_mut().find(|r| r.id == id) {
            *view = updated;
        }
        self.persist(&state.requirements);
    }

    /// Snapshot of the canonical collection
    pub async fn all(&self) -> Vec<Requirement> {
        self.state.read().await.requirements.clone()
    }

    /// Snapshot of the filtered view
    pub async fn filtered(&self) -> Vec<Requirement> {
        self.state.read().await.filtered.clone()
    }

    /// Look up a requirement by id in the canonical collection
    pub async fn get(&self, id: Uuid) -> Option<Requirement> {
        self.state
            .read()
            .await
            .requirements
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }
}
