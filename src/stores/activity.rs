//! Activity/preference tracker.
//!
//! Records per-user view/favorite/inquiry events and preference
//! documents. Tracking is advisory: persistence failures are logged and
//! never surfaced.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::config::{DEFAULT_ACTIVITY_LIMIT, KEY_ACTIVITIES, KEY_PREFERENCES};
use crate::domain::{
    ActivityRecord, ActivityType, ActivityView, PreferenceDocument, PropertySnapshot,
};
use crate::infra::{KeyValueStore, KeyValueStoreExt};

use super::property::PropertyStore;

/// Tracker over the append-only activity log (`user_activities`) and the
/// per-user preference documents (`user_preferences`). Reads join
/// against the property store's current collection.
pub struct ActivityTracker<S: KeyValueStore> {
    backend: Arc<S>,
    properties: Arc<PropertyStore<S>>,
}

impl<S: KeyValueStore> ActivityTracker<S> {
    /// Create a tracker over the given backend and property store
    pub fn new(backend: Arc<S>, properties: Arc<PropertyStore<S>>) -> Self {
        Self {
            backend,
            properties,
        }
    }

    /// Append a timestamped record to the activity log. Never fails
    /// visibly; a lost record only degrades history.
    pub async fn track(&self, user_id: Uuid, property_id: Uuid, activity_type: ActivityType) {
        let mut log: Vec<ActivityRecord> =
            self.backend.get_json(KEY_ACTIVITIES).unwrap_or_default();
        log.push(ActivityRecord {
            user_id,
            property_id,
            activity_type,
            occurred_at: Utc::now(),
        });
        if !self.backend.set_json(KEY_ACTIVITIES, &log) {
            tracing::warn!(user_id = %user_id, "Activity record not persisted");
        }
    }

    /// A user's most recent activity, newest first, truncated to
    /// `limit` (or a default), each record enriched with a snapshot of
    /// the referenced listing. Listings that were since deleted yield a
    /// `None` snapshot.
    pub async fn user_activity(&self, user_id: Uuid, limit: Option<usize>) -> Vec<ActivityView> {
        let log: Vec<ActivityRecord> = self.backend.get_json(KEY_ACTIVITIES).unwrap_or_default();

        let mut records: Vec<ActivityRecord> = log
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect();
        records.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        records.truncate(limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT));

        let mut views = Vec::with_capacity(records.len());
        for record in records {
            let property = self
                .properties
                .get(record.property_id)
                .await
                .map(|p| PropertySnapshot::from(&p));
            views.push(ActivityView { record, property });
        }
        views
    }

    /// Upsert a user's preference document, stamping the update time.
    pub async fn update_preferences(&self, mut doc: PreferenceDocument) {
        doc.updated_at = Utc::now();
        let mut docs: Vec<PreferenceDocument> =
            self.backend.get_json(KEY_PREFERENCES).unwrap_or_default();
        match docs.iter_mut().find(|d| d.user_id == doc.user_id) {
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
        if !self.backend.set_json(KEY_PREFERENCES, &docs) {
            tracing::warn!("Preference document not persisted");
        }
    }

    /// Read a user's preference document, if one was saved.
    pub async fn preferences(&self, user_id: Uuid) -> Option<PreferenceDocument> {
        let docs: Vec<PreferenceDocument> =
            self.backend.get_json(KEY_PREFERENCES).unwrap_or_default();
        docs.into_iter().find(|d| d.user_id == user_id)
    }
}
