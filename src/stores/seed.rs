//! Built-in demo dataset used to seed empty stores on first run.

use chrono::Utc;
use once_cell::sync::Lazy;
use uuid::{uuid, Uuid};

use crate::domain::{
    BudgetRange, Coordinates, Infrastructure, LegalStatus, ListingType, Location, Property,
    PropertyStatus, PropertyType, Requirement, RequirementStatus, SizeUnit, TransactionType,
};

/// Owner of the demo listings
pub const DEMO_OWNER_ID: Uuid = uuid!("9b2f61da-4c31-4f5e-8d2a-7c8e1b3a5f60");

/// Requester of the demo requirement
pub const DEMO_SEEKER_ID: Uuid = uuid!("d3b07384-d9a0-4c9e-9a70-2f7b1c6e8a11");

/// Id of the Nashik demo listing
pub const NASHIK_PROPERTY_ID: Uuid = uuid!("f47ac10b-58cc-4372-a567-0e02b2c3d479");

/// Id of the Pune demo listing
pub const PUNE_PROPERTY_ID: Uuid = uuid!("6ba7b810-9dad-11d1-80b4-00c04fd430c8");

/// The two demo listings every fresh install starts with
pub static SEED_PROPERTIES: Lazy<Vec<Property>> = Lazy::new(|| {
    vec![
        Property {
            id: NASHIK_PROPERTY_ID,
            user_id: DEMO_OWNER_ID,
            title: "5 Acre Irrigated Farmland near Nashik".to_string(),
            listing_type: ListingType::Sale,
            property_type: PropertyType::Agricultural,
            location: Location {
                state: "Maharashtra".to_string(),
                district: "Nashik".to_string(),
                area: "Dindori".to_string(),
                address: "Gat No. 218, Dindori-Vani Road".to_string(),
                coordinates: Some(Coordinates {
                    latitude: 20.2042,
                    longitude: 73.8321,
                }),
            },
            size: 5.0,
            size_unit: SizeUnit::Acre,
            sale_price: Some(7_500_000),
            rent_price: None,
            lease_terms: None,
            legal_status: LegalStatus::Clear,
            infrastructure: Infrastructure {
                water: true,
                electricity: true,
                road_access: true,
            },
            soil_type: Some("black cotton".to_string()),
            images: vec!["/images/seed/nashik-farm.jpg".to_string()],
            availability: "Immediate".to_string(),
            description: "Well-irrigated grape-growing belt plot with bore well and drip lines."
                .to_string(),
            views: 0,
            inquiries: 0,
            status: PropertyStatus::Active,
            featured: true,
            created_at: Utc::now(),
        },
        Property {
            id: PUNE_PROPERTY_ID,
            user_id: DEMO_OWNER_ID,
            title: "Commercial Plot on Solapur Highway".to_string(),
            listing_type: ListingType::Both,
            property_type: PropertyType::Commercial,
            location: Location {
                state: "Maharashtra".to_string(),
                district: "Pune".to_string(),
                area: "Hadapsar".to_string(),
                address: "Plot 14, Solapur Highway Service Road".to_string(),
                coordinates: None,
            },
            size: 12_000.0,
            size_unit: SizeUnit::SquareFoot,
            sale_price: Some(24_000_000),
            rent_price: Some(180_000),
            lease_terms: None,
            legal_status: LegalStatus::Clear,
            infrastructure: Infrastructure {
                water: true,
                electricity: true,
                road_access: true,
            },
            soil_type: None,
            images: vec!["/images/seed/pune-plot.jpg".to_string()],
            availability: "From next quarter".to_string(),
            description: "Highway-facing plot suited for showroom or warehouse development."
                .to_string(),
            views: 0,
            inquiries: 0,
            status: PropertyStatus::Active,
            featured: false,
            created_at: Utc::now(),
        },
    ]
});

/// The demo requirement every fresh install starts with
pub static SEED_REQUIREMENTS: Lazy<Vec<Requirement>> = Lazy::new(|| {
    vec![Requirement {
        id: uuid!("1c9e8f3a-2b6d-4e7f-9a1b-3c5d7e9f1a2b"),
        user_id: DEMO_SEEKER_ID,
        transaction_type: TransactionType::Buy,
        land_type: PropertyType::Agricultural,
        purpose: "Organic vegetable farm for a farm-to-table venture".to_string(),
        location: Location {
            state: "Maharashtra".to_string(),
            district: "Satara".to_string(),
            area: "Wai".to_string(),
            address: String::new(),
            coordinates: None,
        },
        size_min: 2.0,
        size_max: 6.0,
        size_unit: SizeUnit::Acre,
        budget: Some(BudgetRange {
            min: 2_000_000,
            max: 6_000_000,
        }),
        rent_budget: None,
        lease_duration_months: None,
        timeline: "Within 3 months".to_string(),
        specific_needs: vec![
            "year-round water source".to_string(),
            "clear 7/12 extract".to_string(),
        ],
        responses: 0,
        status: RequirementStatus::Active,
        created_at: Utc::now(),
    }]
});
