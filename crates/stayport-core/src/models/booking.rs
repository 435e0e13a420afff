//! Booking domain model and temporal status derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StayResult;
use crate::pricing;

/// Persisted booking status. `Confirmed` is the default on creation;
/// `Cancelled` is terminal and set only by an explicit cancel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
}

/// A booking's state as classified from the current date, as opposed
/// to its persisted [`BookingStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalStatus {
    Upcoming,
    Active,
    Completed,
    Cancelled,
}

/// A booking as returned by the backend.
///
/// The `Default` impl exists only for the gateway's degraded-mode
/// placeholder; a defaulted booking carries no meaningful dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub hotel_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: u32,
    pub special_requests: Option<String>,
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Classify this booking against `today`.
    ///
    /// A persisted `Cancelled` status overrides the date-derived
    /// classification. Otherwise: before check-in it is `Upcoming`,
    /// from check-in (inclusive) to check-out (exclusive) it is
    /// `Active`, and from check-out onward it is `Completed`.
    pub fn temporal_status(&self, today: NaiveDate) -> TemporalStatus {
        if self.status == BookingStatus::Cancelled {
            return TemporalStatus::Cancelled;
        }
        if today < self.check_in_date {
            TemporalStatus::Upcoming
        } else if today >= self.check_out_date {
            TemporalStatus::Completed
        } else {
            TemporalStatus::Active
        }
    }

    /// Only bookings still classified `Upcoming` may be cancelled.
    pub fn is_cancellable(&self, today: NaiveDate) -> bool {
        self.temporal_status(today) == TemporalStatus::Upcoming
    }
}

/// Fields submitted to create a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub hotel_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: u32,
    pub special_requests: Option<String>,
    pub total_price: f64,
}

impl CreateBooking {
    /// The booking-submission boundary check, run before any network
    /// call: the stay must be at least one night and the guest count
    /// must fit the room's capacity (ceiling of
    /// [`pricing::DEFAULT_GUEST_CAPACITY`] when the capacity is
    /// unknown).
    pub fn validate(&self, capacity: Option<u32>) -> StayResult<()> {
        pricing::validate_stay(self.check_in_date, self.check_out_date)?;
        pricing::validate_guests(self.guests, capacity)
    }
}
