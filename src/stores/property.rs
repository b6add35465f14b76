//! Property store - owns the canonical and filtered listing collections.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::config::{Config, KEY_PROPERTIES};
use crate::domain::{NewProperty, Property, PropertyFilter, PropertyPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::{KeyValueStore, KeyValueStoreExt};

use super::seed::SEED_PROPERTIES;

#[derive(Default)]
struct PropertyState {
    properties: Vec<Property>,
    filtered: Vec<Property>,
    loading: bool,
}

/// Store owning the property collections.
///
/// The canonical collection holds every listing in insertion order
/// (newest first); the filtered collection is the subsequence the last
/// filter or search produced. Both are persisted as one JSON blob under
/// the `properties` key.
pub struct PropertyStore<S: KeyValueStore> {
    backend: Arc<S>,
    latency: Duration,
    state: RwLock<PropertyState>,
}

impl<S: KeyValueStore> PropertyStore<S> {
    /// Create a store over the given backend
    pub fn new(backend: Arc<S>, config: &Config) -> Self {
        Self {
            backend,
            latency: Duration::from_millis(config.simulated_latency_ms),
            state: RwLock::new(PropertyState::default()),
        }
    }

    /// Emulates backend latency; the only suspension point in the store.
    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn set_loading(&self, loading: bool) {
        self.state.write().await.loading = loading;
    }

    fn persist(&self, properties: &[Property]) {
        self.backend.set_json(KEY_PROPERTIES, &properties);
    }

    /// Load the persisted collection, seeding the built-in dataset on
    /// first run. Idempotent: repeated calls without intervening
    /// mutation yield the same collection.
    pub async fn fetch(&self) -> Vec<Property> {
        self.set_loading(true).await;
        self.simulate_latency().await;

        let properties: Vec<Property> = match self.backend.get_json(KEY_PROPERTIES) {
            Some(stored) => stored,
            None => {
                let seed = SEED_PROPERTIES.clone();
                tracing::info!(count = seed.len(), "Seeding property collection");
                self.persist(&seed);
                seed
            }
        };

        let mut state = self.state.write().await;
        state.properties = properties.clone();
        state.filtered = properties.clone();
        state.loading = false;
        properties
    }

    /// Add a listing for a user. Assigns id, creation timestamp, and
    /// zero counters; prepends to both views and persists.
    pub async fn add(&self, user_id: Uuid, data: NewProperty) -> AppResult<Property> {
        self.set_loading(true).await;
        let result = self.add_inner(user_id, data).await;
        self.set_loading(false).await;
        result
    }

    async fn add_inner(&self, user_id: Uuid, data: NewProperty) -> AppResult<Property> {
        data.validate()?;

        let property = Property::from_submission(user_id, data);
        let mut state = self.state.write().await;
        state.properties.insert(0, property.clone());
        state.filtered.insert(0, property.clone());
        self.persist(&state.properties);

        tracing::debug!(id = %property.id, "Listing added");
        Ok(property)
    }

    /// Merge a patch into the listing with the given id, in both views.
    /// An unmatched id is a silent no-op and returns `None`.
    pub async fn update(&self, id: Uuid, patch: PropertyPatch) -> Option<Property> {
        let mut state = self.state.write().await;
        let updated = match state.properties.iter_mut().find(|p| p.id == id) {
            Some(property) => {
                patch.apply(property);
                property.clone()
            }
            None => return None,
        };
        if let Some(view) = state.filtered.iter_mut().find(|p| p.id == id) {
            *view = updated.clone();
        }
        self.persist(&state.properties);
        Some(updated)
    }

    /// Merge a patch into a listing the acting user owns.
    ///
    /// Unlike [`update`](Self::update), an unknown id and a non-owner
    /// are surfaced as errors so the caller can notify the user.
    pub async fn update_owned(
        &self,
        id: Uuid,
        owner_id: Uuid,
        patch: PropertyPatch,
    ) -> AppResult<Property> {
        self.guard_owner(id, owner_id).await?;
        self.update(id, patch).await.ok_or(AppError::NotFound)
    }

    /// Remove a listing from both views. Removing an unknown id is a
    /// no-op.
    pub async fn delete(&self, id: Uuid) {
        let mut state = self.state.write().await;
        let before = state.properties.len();
        state.properties.retain(|p| p.id != id);
        state.filtered.retain(|p| p.id != id);
        if state.properties.len() != before {
            self.persist(&state.properties);
            tracing::debug!(id = %id, "Listing deleted");
        }
    }

    /// Remove a listing the acting user owns
    pub async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        self.guard_owner(id, owner_id).await?;
        self.delete(id).await;
        Ok(())
    }

    async fn guard_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<()> {
        let state = self.state.read().await;
        let property = state
            .properties
            .iter()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound)?;
        if !property.is_owned_by(owner_id) {
            return Err(AppError::Forbidden);
        }
        Ok(())
    }

    /// Apply search constraints conjunctively over the canonical
    /// collection, replacing the filtered view. An empty constraint set
    /// restores the full collection.
    pub async fn set_search_filters(&self, filters: &[PropertyFilter]) -> Vec<Property> {
        let mut state = self.state.write().await;
        let filtered: Vec<Property> = state
            .properties
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .cloned()
            .collect();
        state.filtered = filtered.clone();
        filtered
    }

    /// Free-text search over title, location fields, and description.
    /// An empty or whitespace-only query restores the full collection.
    pub async fn search(&self, query: &str) -> Vec<Property> {
        let query = query.trim();
        let mut state = self.state.write().await;
        let filtered: Vec<Property> = if query.is_empty() {
            state.properties.clone()
        } else {
            state
                .properties
                .iter()
                .filter(|p| p.matches_query(query))
                .cloned()
                .collect()
        };
        state.filtered = filtered.clone();
        filtered
    }

    /// Bump the view counter. Unknown id is a no-op.
    pub async fn record_view(&self, id: Uuid) {
        self.bump(id, |p| p.views += 1).await;
    }

    /// Bump the inquiry counter. Unknown id is a no-op.
    pub async fn record_inquiry(&self, id: Uuid) {
        self.bump(id, |p| p.inquiries += 1).await;
    }

    async fn bump(&self, id: Uuid, apply: impl Fn(&mut Property)) {
        let mut state = self.state.write().await;
        let updated = match state.properties.iter_mut().find(|p| p.id == id) {
            Some(property) => {
                apply(property);
                property.clone()
            }
            None => return,
        };
        if let Some(view) = state.filtered.iter_mut().find(|p| p.id == id) {
            *view = updated;
        }
        self.persist(&state.properties);
    }

    /// Snapshot of the canonical collection
    pub async fn all(&self) -> Vec<Property> {
        self.state.read().await.properties.clone()
    }

    /// Snapshot of the filtered view
    pub async fn filtered(&self) -> Vec<Property> {
        self.state.read().await.filtered.clone()
    }

    /// Look up a listing by id in the canonical collection
    pub async fn get(&self, id: Uuid) -> Option<Property> {
        self.state
            .read()
            .await
            .properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }
}
