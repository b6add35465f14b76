//! Activity/preference tracker integration tests over a memory backend.

mod common;

use common::{new_property, stores};
use land_market::domain::{ActivityType, BudgetRange, PreferenceDocument};
use land_market::stores::seed::NASHIK_PROPERTY_ID;
use uuid::Uuid;

#[tokio::test]
async fn test_tracked_activity_is_enriched_with_snapshot() {
    let stores = stores();
    let properties = stores.properties();
    let tracker = stores.tracker();
    properties.fetch().await;

    let user = Uuid::new_v4();
    tracker.track(user, NASHIK_PROPERTY_ID, ActivityType::View).await;

    let activity = tracker.user_activity(user, None).await;
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].record.activity_type, ActivityType::View);

    let snapshot = activity[0].property.as_ref().unwrap();
    assert_eq!(snapshot.id, NASHIK_PROPERTY_ID);
    assert_eq!(snapshot.effective_price, 7_500_000);
    assert!(snapshot.location.contains("Nashik"));
}

#[tokio::test]
async fn test_activity_is_filtered_by_user() {
    let stores = stores();
    let tracker = stores.tracker();
    stores.properties().fetch().await;

    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    tracker.track(alice, NASHIK_PROPERTY_ID, ActivityType::View).await;
    tracker.track(bob, NASHIK_PROPERTY_ID, ActivityType::Favorite).await;
    tracker.track(alice, NASHIK_PROPERTY_ID, ActivityType::Inquiry).await;

    assert_eq!(tracker.user_activity(alice, None).await.len(), 2);
    assert_eq!(tracker.user_activity(bob, None).await.len(), 1);
}

#[tokio::test]
async fn test_activity_is_newest_first_and_truncated() {
    let stores = stores();
    let tracker = stores.tracker();
    stores.properties().fetch().await;

    let user = Uuid::new_v4();
    tracker.track(user, NASHIK_PROPERTY_ID, ActivityType::View).await;
    tracker.track(user, NASHIK_PROPERTY_ID, ActivityType::Favorite).await;
    tracker.track(user, NASHIK_PROPERTY_ID, ActivityType::Inquiry).await;

    let limited = tracker.user_activity(user, Some(2)).await;
    assert_eq!(limited.len(), 2);
    for pair in limited.windows(2) {
        assert!(pair[0].record.occurred_at >= pair[1].record.occurred_at);
    }
}

#[tokio::test]
async fn test_deleted_property_yields_no_snapshot() {
    let stores = stores();
    let properties = stores.properties();
    let tracker = stores.tracker();
    properties.fetch().await;

    let user = Uuid::new_v4();
    let added = properties
        .add(user, new_property("Short-lived plot", "Wardha", Some(9)))
        .await
        .unwrap();
    tracker.track(user, added.id, ActivityType::View).await;
    properties.delete(added.id).await;

    let activity = tracker.user_activity(user, None).await;
    assert_eq!(activity.len(), 1);
    assert!(activity[0].property.is_none());
}

#[tokio::test]
async fn test_preferences_upsert_by_user() {
    let stores = stores();
    let tracker = stores.tracker();

    let user = Uuid::new_v4();
    assert!(tracker.preferences(user).await.is_none());

    let mut doc = PreferenceDocument::empty(user);
    doc.preferred_locations = vec!["Nashik".to_string()];
    tracker.update_preferences(doc).await;

    let mut doc = tracker.preferences(user).await.unwrap();
    assert_eq!(doc.preferred_locations, vec!["Nashik".to_string()]);

    // Second write replaces the document rather than adding another.
    doc.price_range = Some(BudgetRange {
        min: 100_000,
        max: 500_000,
    });
    tracker.update_preferences(doc).await;

    let reloaded = tracker.preferences(user).await.unwrap();
    assert!(reloaded.price_range.is_some());
    assert_eq!(reloaded.preferred_locations.len(), 1);
}
