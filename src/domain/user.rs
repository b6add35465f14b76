//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Looking to buy or rent land
    Seeker,
    /// Owns land offered on the marketplace
    Owner,
    /// Brokers deals between seekers and owners
    Broker,
    /// Surveyor, lawyer, or other service professional
    Professional,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Seeker => "seeker",
            UserRole::Owner => "owner",
            UserRole::Broker => "broker",
            UserRole::Professional => "professional",
        };
        write!(f, "{}", s)
    }
}

/// Subscription tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Basic,
    Premium,
    Enterprise,
}

impl SubscriptionTier {
    /// Tier assigned to newly registered users
    pub fn default_for_new_users() -> Self {
        SubscriptionTier::Free
    }
}

/// User domain entity.
///
/// The password is stored in plaintext and round-trips through the
/// persisted user table; authentication security is explicitly out of
/// scope for this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub tier: SubscriptionTier,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl User {
    /// Create a new user from registration data.
    ///
    /// New users get the default subscription tier and are marked verified;
    /// there is no verification flow behind this flag.
    pub fn from_registration(data: RegisterUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: data.email,
            phone: data.phone,
            name: data.name,
            password: data.password,
            role: data.role,
            tier: SubscriptionTier::default_for_new_users(),
            verified: true,
            created_at: Utc::now(),
            last_login: None,
            profile_image: None,
            location: None,
        }
    }

    /// Stamp the last-login timestamp
    pub fn touch_login(&mut self) {
        self.last_login = Some(Utc::now());
    }
}

/// Registration data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 6, message = "Phone number is too short"))]
    pub phone: String,
    pub role: UserRole,
}

/// Partial user update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub tier: Option<SubscriptionTier>,
    pub profile_image: Option<String>,
    pub location: Option<String>,
}

impl UserPatch {
    /// Merge this patch into a user record
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(tier) = self.tier {
            user.tier = tier;
        }
        if let Some(image) = &self.profile_image {
            user.profile_image = Some(image.clone());
        }
        if let Some(location) = &self.location {
            user.location = Some(location.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_data() -> RegisterUser {
        RegisterUser {
            email: "farmer@example.com".to_string(),
            password: "growmore123".to_string(),
            name: "Ravi Patil".to_string(),
            phone: "9822001122".to_string(),
            role: UserRole::Owner,
        }
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::from_registration(register_data());
        assert_eq!(user.tier, SubscriptionTier::Free);
        assert!(user.verified);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_patch_leaves_unset_fields() {
        let mut user = User::from_registration(register_data());
        let patch = UserPatch {
            name: Some("R. Patil".to_string()),
            ..Default::default()
        };
        patch.apply(&mut user);
        assert_eq!(user.name, "R. Patil");
        assert_eq!(user.phone, "9822001122");
        assert_eq!(user.role, UserRole::Owner);
    }

    #[test]
    fn test_register_validation() {
        let mut data = register_data();
        data.email = "not-an-email".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_role_serde_form() {
        let json = serde_json::to_string(&UserRole::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
    }
}
