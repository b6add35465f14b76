//! Property listing entity, filters, and related value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// How a property is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
    Both,
}

/// Land use category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Agricultural,
    Residential,
    Commercial,
    Industrial,
}

/// Legal standing of the plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalStatus {
    Clear,
    Disputed,
    UnderLoan,
}

/// Listing lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Sold,
    Rented,
    Inactive,
}

/// Unit the plot size is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Acre,
    Guntha,
    Hectare,
    #[serde(rename = "sqft")]
    SquareFoot,
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Structured location of a plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    pub district: String,
    pub area: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Short display form used in snapshots and cards
    pub fn display(&self) -> String {
        format!("{}, {}, {}", self.area, self.district, self.state)
    }

    /// Case-insensitive substring match across state, district, and area
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.state.to_lowercase().contains(&needle)
            || self.district.to_lowercase().contains(&needle)
            || self.area.to_lowercase().contains(&needle)
    }
}

/// Lease conditions attached to a rent listing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaseTerms {
    pub duration_months: u32,
    pub deposit: u64,
}

/// Basic infrastructure available on the plot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Infrastructure {
    pub water: bool,
    pub electricity: bool,
    pub road_access: bool,
}

/// Property listing entity.
///
/// A listing should carry a sale price when offered for sale and a rent
/// price when offered for rent. This is not enforced here; listings with
/// neither price filter as effective price 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub location: Location,
    pub size: f64,
    pub size_unit: SizeUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_terms: Option<LeaseTerms>,
    pub legal_status: LegalStatus,
    pub infrastructure: Infrastructure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    pub images: Vec<String>,
    pub availability: String,
    pub description: String,
    pub views: u64,
    pub inquiries: u64,
    pub status: PropertyStatus,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Build a listing from submitted data; assigns id, timestamp,
    /// zero counters, and active status.
    pub fn from_submission(user_id: Uuid, data: NewProperty) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: data.title,
            listing_type: data.listing_type,
            property_type: data.property_type,
            location: data.location,
            size: data.size,
            size_unit: data.size_unit,
            sale_price: data.sale_price,
            rent_price: data.rent_price,
            lease_terms: data.lease_terms,
            legal_status: data.legal_status,
            infrastructure: data.infrastructure,
            soil_type: data.soil_type,
            images: data.images,
            availability: data.availability,
            description: data.description,
            views: 0,
            inquiries: 0,
            status: PropertyStatus::Active,
            featured: false,
            created_at: Utc::now(),
        }
    }

    /// Price used for range filtering: sale price if present, else rent
    /// price, else 0.
    pub fn effective_price(&self) -> u64 {
        self.sale_price.or(self.rent_price).unwrap_or(0)
    }

    /// Whether the given user owns this listing
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Case-insensitive OR match over title, location fields, and
    /// description. The query is expected to be non-empty and trimmed.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.location.matches(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// Listing submission data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProperty {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,
    pub listing_type: ListingType,
    pub property_type: PropertyType,
    pub location: Location,
    #[validate(range(min = 0.01, message = "Size must be positive"))]
    pub size: f64,
    pub size_unit: SizeUnit,
    pub sale_price: Option<u64>,
    pub rent_price: Option<u64>,
    pub lease_terms: Option<LeaseTerms>,
    pub legal_status: LegalStatus,
    #[serde(default)]
    pub infrastructure: Infrastructure,
    pub soil_type: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub description: String,
}

/// Partial listing update. `None` fields are left untouched; optional
/// listing fields cannot be cleared through a patch.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub listing_type: Option<ListingType>,
    pub property_type: Option<PropertyType>,
    pub location: Option<Location>,
    pub size: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub sale_price: Option<u64>,
    pub rent_price: Option<u64>,
    pub lease_terms: Option<LeaseTerms>,
    pub legal_status: Option<LegalStatus>,
    pub infrastructure: Option<Infrastructure>,
    pub soil_type: Option<String>,
    pub images: Option<Vec<String>>,
    pub availability: Option<String>,
    pub description: Option<String>,
    pub status: Option<PropertyStatus>,
    pub featured: Option<bool>,
}

impl PropertyPatch {
    /// Merge this patch into a listing
    pub fn apply(&self, property: &mut Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(listing_type) = self.listing_type {
            property.listing_type = listing_type;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(location) = &self.location {
            property.location = location.clone();
        }
        if let Some(size) = self.size {
            property.size = size;
        }
        if let Some(size_unit) = self.size_unit {
            property.size_unit = size_unit;
        }
        if let Some(sale_price) = self.sale_price {
            property.sale_price = Some(sale_price);
        }
        if let Some(rent_price) = self.rent_price {
            property.rent_price = Some(rent_price);
        }
        if let Some(lease_terms) = self.lease_terms {
            property.lease_terms = Some(lease_terms);
        }
        if let Some(legal_status) = self.legal_status {
            property.legal_status = legal_status;
        }
        if let Some(infrastructure) = self.infrastructure {
            property.infrastructure = infrastructure;
        }
        if let Some(soil_type) = &self.soil_type {
            property.soil_type = Some(soil_type.clone());
        }
        if let Some(images) = &self.images {
            property.images = images.clone();
        }
        if let Some(availability) = &self.availability {
            property.availability = availability.clone();
        }
        if let Some(description) = &self.description {
            property.description = description.clone();
        }
        if let Some(status) = self.status {
            property.status = status;
        }
        if let Some(featured) = self.featured {
            property.featured = featured;
        }
    }
}

/// A single search constraint. Constraints compose conjunctively; an
/// absent constraint is simply not part of the filter set, so a zero
/// price bound is an explicit bound rather than "unset".
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFilter {
    /// Exact listing-type match; listings offered as `Both` pass either way
    Listing(ListingType),
    /// Exact land-use category match
    Kind(PropertyType),
    /// Case-insensitive substring over state, district, and area
    Location(String),
    /// Inclusive bounds on the effective price
    PriceRange { min: Option<u64>, max: Option<u64> },
}

impl PropertyFilter {
    /// Whether a listing satisfies this constraint
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            PropertyFilter::Listing(wanted) => {
                property.listing_type == *wanted || property.listing_type == ListingType::Both
            }
            PropertyFilter::Kind(wanted) => property.property_type == *wanted,
            PropertyFilter::Location(needle) => property.location.matches(needle),
            PropertyFilter::PriceRange { min, max } => {
                let price = property.effective_price();
                min.map_or(true, |m| price >= m) && max.map_or(true, |m| price <= m)
            }
        }
    }
}
