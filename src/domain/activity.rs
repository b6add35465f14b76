//! Activity log records and per-user preference documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::{Property, PropertyStatus};
use super::requirement::BudgetRange;

/// Kind of interaction a user had with a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    View,
    Favorite,
    Inquiry,
}

/// One entry in the append-only activity log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub activity_type: ActivityType,
    pub occurred_at: DateTime<Utc>,
}

/// Display fields of a listing, captured at read time when an activity
/// record is joined against the current property collection.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySnapshot {
    pub id: Uuid,
    pub title: String,
    pub effective_price: u64,
    pub location: String,
    pub status: PropertyStatus,
}

impl From<&Property> for PropertySnapshot {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            effective_price: property.effective_price(),
            location: property.location.display(),
            status: property.status,
        }
    }
}

/// Activity record enriched for display. `property` is `None` when the
/// referenced listing has since been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub record: ActivityRecord,
    pub property: Option<PropertySnapshot>,
}

/// Per-user preference document, one per user, upserted by user id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceDocument {
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<BudgetRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    pub preferred_locations: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl PreferenceDocument {
    /// Create an empty preference document for a user
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            price_range: None,
            bedrooms: None,
            preferred_locations: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}
