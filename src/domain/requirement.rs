//! Buyer requirement entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::property::{Location, PropertyType, SizeUnit};

/// How the requester intends to acquire land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Rent,
    Lease,
}

/// Requirement lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    Active,
    Fulfilled,
    Closed,
}

/// Inclusive money range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
}

/// A buyer/renter's stated need. Matched against listings by humans,
/// not by the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    pub id: Uuid,
    pub user_id: Uuid,
    pub transaction_type: TransactionType,
    pub land_type: PropertyType,
    pub purpose: String,
    pub location: Location,
    pub size_min: f64,
    pub size_max: f64,
    pub size_unit: SizeUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_duration_months: Option<u32>,
    pub timeline: String,
    pub specific_needs: Vec<String>,
    pub responses: u64,
    pub status: RequirementStatus,
    pub created_at: DateTime<Utc>,
}

impl Requirement {
    /// Build a requirement from submitted data; assigns id, timestamp,
    /// zero response counter, and active status.
    pub fn from_submission(user_id: Uuid, data: NewRequirement) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            transaction_type: data.transaction_type,
            land_type: data.land_type,
            purpose: data.purpose,
            location: data.location,
            size_min: data.size_min,
            size_max: data.size_max,
            size_unit: data.size_unit,
            budget: data.budget,
            rent_budget: data.rent_budget,
            lease_duration_months: data.lease_duration_months,
            timeline: data.timeline,
            specific_needs: data.specific_needs,
            responses: 0,
            status: RequirementStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive OR match over purpose, location fields, and
    /// timeline text. The query is expected to be non-empty and trimmed.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.purpose.to_lowercase().contains(&query)
            || self.location.matches(&query)
            || self.timeline.to_lowercase().contains(&query)
    }
}

/// Requirement submission data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRequirement {
    pub transaction_type: TransactionType,
    pub land_type: PropertyType,
    #[validate(length(min = 3, message = "Purpose is required"))]
    pub purpose: String,
    pub location: Location,
    #[validate(range(min = 0.01, message = "Minimum size must be positive"))]
    pub size_min: f64,
    #[validate(range(min = 0.01, message = "Maximum size must be positive"))]
    pub size_max: f64,
    pub size_unit: SizeUnit,
    pub budget: Option<BudgetRange>,
    pub rent_budget: Option<u64>,
    pub lease_duration_months: Option<u32>,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub specific_needs: Vec<String>,
}

/// Partial requirement update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementPatch {
    pub transaction_type: Option<TransactionType>,
    pub land_type: Option<PropertyType>,
    pub purpose: Option<String>,
    pub location: Option<Location>,
    pub size_min: Option<f64>,
    pub size_max: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub budget: Option<BudgetRange>,
    pub rent_budget: Option<u64>,
    pub lease_duration_months: Option<u32>,
    pub timeline: Option<String>,
    pub specific_needs: Option<Vec<String>>,
    pub status: Option<RequirementStatus>,
}

impl RequirementPatch {
    /// Merge this patch into a requirement
    pub fn apply(&self, requirement: &mut Requirement) {
        if let Some(transaction_type) = self.transaction_type {
            requirement.transaction_type = transaction_type;
        }
        if let Some(land_type) = self.land_type {
            requirement.land_type = land_type;
        }
        if let Some(purpose) = &self.purpose {
            requirement.purpose = purpose.clone();
        }
        if let Some(location) = &self.location {
            requirement.location = location.clone();
        }
        if let Some(size_min) = self.size_min {
            requirement.size_min = size_min;
        }
        if let Some(size_max) = self.size_max {
            requirement.size_max = size_max;
        }
        if let Some(size_unit) = self.size_unit {
            requirement.size_unit = size_unit;
        }
        if let Some(budget) = self.budget {
            requirement.budget = Some(budget);
        }
        if let Some(rent_budget) = self.rent_budget {
            requirement.rent_budget = Some(rent_budget);
        }
        if let Some(months) = self.lease_duration_months {
            requirement.lease_duration_months = Some(months);
        }
        if let Some(timeline) = &self.timeline {
            requirement.timeline = timeline.clone();
        }
        if let Some(needs) = &self.specific_needs {
            requirement.specific_needs = needs.clone();
        }
        if let Some(status) = self.status {
            requirement.status = status;
        }
    }
}
