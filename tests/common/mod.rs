//! Shared helpers for integration tests.
//!
//! Each test binary compiles this module separately and uses a subset
//! of it.
#![allow(dead_code)]

use std::sync::Arc;

use land_market::domain::{
    Infrastructure, LegalStatus, ListingType, Location, NewProperty, PropertyType, RegisterUser,
    SizeUnit, UserRole,
};
use land_market::{Config, MemoryStore, Stores};

/// Initialise tracing once for the test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Memory-backed store container with no simulated latency
pub fn stores() -> Stores<MemoryStore> {
    init_tracing();
    Stores::with_backend(Arc::new(MemoryStore::new()), &Config::without_latency("unused"))
}

pub fn register_data(email: &str) -> RegisterUser {
    RegisterUser {
        email: email.to_string(),
        password: "fertile-soil-9".to_string(),
        name: "Test Farmer".to_string(),
        phone: "9800011122".to_string(),
        role: UserRole::Seeker,
    }
}

pub fn new_property(title: &str, district: &str, sale_price: Option<u64>) -> NewProperty {
    NewProperty {
        title: title.to_string(),
        listing_type: ListingType::Sale,
        property_type: PropertyType::Agricultural,
        location: Location {
            state: "Maharashtra".to_string(),
            district: district.to_string(),
            area: "Test Area".to_string(),
            address: "Survey 1".to_string(),
            coordinates: None,
        },
        size: 3.0,
        size_unit: SizeUnit::Acre,
        sale_price,
        rent_price: None,
        lease_terms: None,
        legal_status: LegalStatus::Clear,
        infrastructure: Infrastructure::default(),
        soil_type: None,
        images: vec![],
        availability: "Immediate".to_string(),
        description: "A test plot".to_string(),
    }
}
