//! Amenity domain model.

use serde::{Deserialize, Serialize};

/// A display-only amenity attached to a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub name: String,
    pub description: String,
    pub available: bool,
}
