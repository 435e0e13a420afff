//! Room domain model.

use serde::{Deserialize, Serialize};

use crate::models::hotel::Hotel;

/// Room category labels as used by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    #[default]
    Standard,
    Deluxe,
    Suite,
}

/// A room belonging to exactly one hotel.
///
/// The `Default` impl exists only for the gateway's degraded-mode
/// placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type: RoomType,
    /// Overrides the hotel's base price when present.
    pub price_per_night: Option<f64>,
    /// Maximum number of guests.
    pub capacity: u32,
    pub available: bool,
    pub description: Option<String>,
}

impl Room {
    /// The effective nightly rate: the room's own price when set,
    /// otherwise the hotel's base price.
    pub fn nightly_rate(&self, hotel: &Hotel) -> f64 {
        self.price_per_night.unwrap_or(hotel.price_per_night)
    }
}

/// Fields required to create a new room under a hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub room_type: RoomType,
    pub price_per_night: Option<f64>,
    pub capacity: u32,
    pub available: bool,
    pub description: Option<String>,
}
