//! Auth store integration tests over a memory backend.

mod common;

use common::{register_data, stores};
use land_market::domain::{SubscriptionTier, UserPatch};
use land_market::AppError;

#[tokio::test]
async fn test_register_establishes_session() {
    let stores = stores();
    let auth = stores.auth();

    let user = auth.register(register_data("new@example.com")).await.unwrap();
    assert_eq!(user.tier, SubscriptionTier::Free);
    assert!(user.verified);
    assert!(auth.is_authenticated().await);
    assert!(auth.token().await.is_some());
    assert!(!auth.loading().await);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let stores = stores();
    let auth = stores.auth();

    auth.register(register_data("dup@example.com")).await.unwrap();
    auth.logout().await;

    let result = auth.register(register_data("dup@example.com")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    assert!(!auth.is_authenticated().await);
}

#[tokio::test]
async fn test_register_then_login_with_same_credentials() {
    let stores = stores();
    let auth = stores.auth();

    let data = register_data("roundtrip@example.com");
    let password = data.password.clone();
    auth.register(data).await.unwrap();
    auth.logout().await;
    assert!(!auth.is_authenticated().await);

    // The registered password is the stored password.
    let user = auth.login("roundtrip@example.com", &password).await.unwrap();
    assert!(auth.is_authenticated().await);
    assert!(user.last_login.is_some());
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let stores = stores();
    let auth = stores.auth();

    auth.register(register_data("secure@example.com")).await.unwrap();
    auth.logout().await;

    let result = auth.login("secure@example.com", "wrong-password").await;
    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    assert!(!auth.is_authenticated().await);
    assert!(auth.current_user().await.is_none());
    assert!(!auth.loading().await);
}

#[tokio::test]
async fn test_logout_keeps_user_table() {
    let stores = stores();
    let auth = stores.auth();

    let data = register_data("stay@example.com");
    let password = data.password.clone();
    auth.register(data).await.unwrap();
    auth.logout().await;

    // Logging in again proves the persisted record survived logout.
    assert!(auth.login("stay@example.com", &password).await.is_ok());
}

#[tokio::test]
async fn test_update_user_writes_through() {
    let stores = stores();
    let auth = stores.auth();

    let data = register_data("profile@example.com");
    let password = data.password.clone();
    auth.register(data).await.unwrap();

    let updated = auth
        .update_user(UserPatch {
            name: Some("Renamed Farmer".to_string()),
            location: Some("Nashik".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed Farmer");

    // The persisted record was updated too: a fresh login sees the name.
    auth.logout().await;
    let user = auth.login("profile@example.com", &password).await.unwrap();
    assert_eq!(user.name, "Renamed Farmer");
    assert_eq!(user.location.as_deref(), Some("Nashik"));
}

#[tokio::test]
async fn test_update_user_without_session_is_noop() {
    let stores = stores();
    let auth = stores.auth();

    let result = auth
        .update_user(UserPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;
    assert!(result.is_none());
}

#[tokio::test]
async fn test_session_restores_from_snapshot() {
    let config = land_market::Config::without_latency("unused");
    let backend = std::sync::Arc::new(land_market::MemoryStore::new());

    // A second auth store over the same backend stands in for a reload.
    let first = land_market::AuthStore::new(backend.clone(), &config);
    first.register(register_data("restore@example.com")).await.unwrap();

    let second = land_market::AuthStore::new(backend, &config);
    assert!(!second.is_authenticated().await);
    let restored = second.restore().await.unwrap();
    assert_eq!(restored.email, "restore@example.com");
    assert!(second.is_authenticated().await);
    assert!(second.token().await.is_some());
}

#[tokio::test]
async fn test_logout_clears_persisted_session() {
    let config = land_market::Config::without_latency("unused");
    let backend = std::sync::Arc::new(land_market::MemoryStore::new());

    let first = land_market::AuthStore::new(backend.clone(), &config);
    first.register(register_data("gone@example.com")).await.unwrap();
    first.logout().await;

    let second = land_market::AuthStore::new(backend, &config);
    assert!(second.restore().await.is_none());
    assert!(!second.is_authenticated().await);
}
