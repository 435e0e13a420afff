//! Hotel domain model.

use serde::{Deserialize, Serialize};

use crate::models::amenity::Amenity;

/// A hotel as returned by the backend. Read-only to end users;
/// created and updated through the admin inventory operations.
///
/// The `Default` impl exists only for the gateway's degraded-mode
/// placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    /// Free-text location (city, region).
    pub location: String,
    pub description: String,
    /// Guest rating on a 0.0–5.0 scale.
    pub rating: f64,
    /// Base nightly price; individual rooms may override it.
    pub price_per_night: f64,
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

/// Fields required to create a new hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotel {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub image_url: Option<String>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

/// Fields that can be updated on an existing hotel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotel {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub price_per_night: Option<f64>,
    pub image_url: Option<String>,
}

/// Query filter for the hotel listing.
#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl HotelFilter {
    /// Query-string pairs in the backend's expected parameter names.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        pairs
    }
}
