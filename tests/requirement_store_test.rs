//! Requirement store integration tests over a memory backend.

mod common;

use common::stores;
use land_market::domain::{
    BudgetRange, Location, NewRequirement, PropertyType, RequirementPatch, RequirementStatus,
    SizeUnit, TransactionType,
};
use land_market::AppError;
use uuid::Uuid;

fn new_requirement(purpose: &str, district: &str) -> NewRequirement {
    NewRequirement {
        transaction_type: TransactionType::Buy,
        land_type: PropertyType::Agricultural,
        purpose: purpose.to_string(),
        location: Location {
            state: "Maharashtra".to_string(),
            district: district.to_string(),
            area: "Test Area".to_string(),
            address: String::new(),
            coordinates: None,
        },
        size_min: 1.0,
        size_max: 4.0,
        size_unit: SizeUnit::Acre,
        budget: Some(BudgetRange {
            min: 100_000,
            max: 900_000,
        }),
        rent_budget: None,
        lease_duration_months: None,
        timeline: "This year".to_string(),
        specific_needs: vec![],
    }
}

#[tokio::test]
async fn test_fetch_seeds_and_is_idempotent() {
    let stores = stores();
    let requirements = stores.requirements();

    let first = requirements.fetch().await;
    assert_eq!(first.len(), 1);

    let second = requirements.fetch().await;
    let first_ids: Vec<Uuid> = first.iter().map(|r| r.id).collect();
    let second_ids: Vec<Uuid> = second.iter().map(|r| r.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_add_assigns_counters_and_prepends() {
    let stores = stores();
    let requirements = stores.requirements();
    requirements.fetch().await;

    let added = requirements
        .add(Uuid::new_v4(), new_requirement("Dairy farm setup", "Ahmednagar"))
        .await
        .unwrap();
    assert_eq!(added.responses, 0);
    assert_eq!(added.status, RequirementStatus::Active);

    let all = requirements.all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, added.id);
}

#[tokio::test]
async fn test_add_rejects_empty_purpose() {
    let stores = stores();
    let requirements = stores.requirements();
    requirements.fetch().await;

    let result = requirements
        .add(Uuid::new_v4(), new_requirement("x", "Ahmednagar"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_update_and_delete_lifecycle() {
    let stores = stores();
    let requirements = stores.requirements();
    requirements.fetch().await;

    let added = requirements
        .add(Uuid::new_v4(), new_requirement("Poultry shed site", "Jalgaon"))
        .await
        .unwrap();

    let updated = requirements
        .update(
            added.id,
            RequirementPatch {
                status: Some(RequirementStatus::Fulfilled),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, RequirementStatus::Fulfilled);

    // Unknown ids are silent no-ops for both update and delete.
    assert!(requirements
        .update(Uuid::new_v4(), RequirementPatch::default())
        .await
        .is_none());
    requirements.delete(Uuid::new_v4()).await;
    assert_eq!(requirements.all().await.len(), 2);

    requirements.delete(added.id).await;
    assert_eq!(requirements.all().await.len(), 1);
}

#[tokio::test]
async fn test_search_over_purpose_and_location() {
    let stores = stores();
    let requirements = stores.requirements();
    requirements.fetch().await;
    requirements
        .add(Uuid::new_v4(), new_requirement("Goat grazing land", "Beed"))
        .await
        .unwrap();

    let by_purpose = requirements.search("grazing").await;
    assert_eq!(by_purpose.len(), 1);

    let by_district = requirements.search("beed").await;
    assert_eq!(by_district.len(), 1);

    let all = requirements.search("").await;
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_record_response_increments_counter() {
    let stores = stores();
    let requirements = stores.requirements();
    requirements.fetch().await;

    let added = requirements
        .add(Uuid::new_v4(), new_requirement("Orchard land", "Ratnagiri"))
        .await
        .unwrap();
    requirements.record_response(added.id).await;
    requirements.record_response(added.id).await;

    assert_eq!(requirements.get(added.id).await.unwrap().responses, 2);
}
