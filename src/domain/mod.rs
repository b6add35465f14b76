//! Domain layer - Core business entities and logic
//!
//! Contains the entities the stores own and persist, independent of the
//! storage backend: users, property listings, buyer requirements, and the
//! activity/preference records derived from them.

pub mod activity;
pub mod property;
pub mod requirement;
pub mod user;

pub use activity::{
    ActivityRecord, ActivityType, ActivityView, PreferenceDocument, PropertySnapshot,
};
pub use property::{
    Coordinates, Infrastructure, LeaseTerms, LegalStatus, ListingType, Location, NewProperty,
    Property, PropertyFilter, PropertyPatch, PropertyStatus, PropertyType, SizeUnit,
};
pub use requirement::{
    BudgetRange, NewRequirement, Requirement, RequirementPatch, RequirementStatus, TransactionType,
};
pub use user::{RegisterUser, SubscriptionTier, User, UserPatch, UserRole};
