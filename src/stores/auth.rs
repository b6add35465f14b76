//! Auth store - owns the current session and the persisted user table.
//!
//! Credentials are compared in plaintext and the session token is an
//! opaque placeholder; authentication security is out of scope for this
//! layer.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::config::{Config, KEY_SESSION, KEY_USERS};
use crate::domain::{RegisterUser, User, UserPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::{KeyValueStore, KeyValueStoreExt};

/// Persisted session snapshot, kept under its own key so a new process
/// restores the session without re-deriving it from the user table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

#[derive(Default)]
struct AuthState {
    user: Option<User>,
    token: Option<String>,
    is_authenticated: bool,
    loading: bool,
}

impl AuthState {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// Store owning the current session and mutating the persisted user
/// table (`local_users`).
pub struct AuthStore<S: KeyValueStore> {
    backend: Arc<S>,
    latency: Duration,
    state: RwLock<AuthState>,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// Create a store over the given backend
    pub fn new(backend: Arc<S>, config: &Config) -> Self {
        Self {
            backend,
            latency: Duration::from_millis(config.simulated_latency_ms),
            state: RwLock::new(AuthState::default()),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn set_loading(&self, loading: bool) {
        self.state.write().await.loading = loading;
    }

    fn load_users(&self) -> Vec<User> {
        self.backend.get_json(KEY_USERS).unwrap_or_default()
    }

    fn persist_users(&self, users: &[User]) {
        self.backend.set_json(KEY_USERS, &users);
    }

    /// Authenticate against the persisted user table.
    ///
    /// On success, stamps the last-login time, persists the updated
    /// table, and establishes session state with a generated opaque
    /// token. The loading flag is cleared on both paths.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        self.set_loading(true).await;
        let result = self.login_inner(email, password).await;
        self.set_loading(false).await;
        result
    }

    async fn login_inner(&self, email: &str, password: &str) -> AppResult<User> {
        self.simulate_latency().await;

        let mut users = self.load_users();
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .filter(|u| u.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        user.touch_login();
        let user = user.clone();
        self.persist_users(&users);

        self.establish_session(user.clone()).await;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Register a new user and establish a session, exactly as login
    /// does. Fails with a conflict when the email is already taken.
    /// The caller-supplied password is what gets stored.
    pub async fn register(&self, data: RegisterUser) -> AppResult<User> {
        self.set_loading(true).await;
        let result = self.register_inner(data).await;
        self.set_loading(false).await;
        result
    }

    async fn register_inner(&self, data: RegisterUser) -> AppResult<User> {
        data.validate()?;
        self.simulate_latency().await;

        let mut users = self.load_users();
        if users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict("User"));
        }

        let user = User::from_registration(data);
        users.push(user.clone());
        self.persist_users(&users);

        self.establish_session(user.clone()).await;
        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn establish_session(&self, user: User) {
        let token = format!("token-{}", Uuid::new_v4().simple());
        let mut state = self.state.write().await;
        state.user = Some(user);
        state.token = Some(token);
        state.is_authenticated = true;
        self.backend.set_json(KEY_SESSION, &state.snapshot());
    }

    /// Clear session state unconditionally and drop the persisted
    /// snapshot. The user table is left untouched.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.user = None;
        state.token = None;
        state.is_authenticated = false;
        self.backend.remove(KEY_SESSION);
        tracing::info!("User logged out");
    }

    /// Merge a patch into the current session user and, when
    /// authenticated, into the corresponding persisted record.
    /// Returns `None` when there is no current user.
    pub async fn update_user(&self, patch: UserPatch) -> Option<User> {
        let mut state = self.state.write().await;
        let user = state.user.as_mut()?;
        patch.apply(user);
        let updated = user.clone();

        if state.is_authenticated {
            let mut users = self.load_users();
            if let Some(stored) = users.iter_mut().find(|u| u.id == updated.id) {
                *stored = updated.clone();
                self.persist_users(&users);
            }
        }
        self.backend.set_json(KEY_SESSION, &state.snapshot());
        Some(updated)
    }

    /// Restore the session from its persisted snapshot, if any.
    pub async fn restore(&self) -> Option<User> {
        let snapshot: SessionSnapshot = self.backend.get_json(KEY_SESSION)?;
        let mut state = self.state.write().await;
        state.user = snapshot.user.clone();
        state.token = snapshot.token;
        state.is_authenticated = snapshot.is_authenticated;
        snapshot.user
    }

    /// Current session user, if any
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Opaque session token, if a session is established
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }
}
