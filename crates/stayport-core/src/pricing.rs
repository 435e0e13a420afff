//! Pricing calculator — pure cost-breakdown derivation for a stay.
//!
//! All functions here are side-effect free. The calculator does not
//! clamp non-positive stays; rejecting them is the job of the
//! booking-submission boundary
//! ([`CreateBooking::validate`](crate::models::booking::CreateBooking::validate)).

use chrono::NaiveDate;

use crate::error::{StayError, StayResult};

/// Fixed tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Guest-count ceiling assumed when a room's capacity is unknown.
pub const DEFAULT_GUEST_CAPACITY: u32 = 4;

/// Derived cost breakdown for a prospective stay. Never persisted;
/// always recomputed from its inputs.
///
/// Values are unrounded floating point; apply [`PricingBreakdown::rounded`]
/// at presentation time. A production reimplementation should prefer
/// integer minor-units internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingBreakdown {
    /// Whole-day difference between check-out and check-in. May be
    /// zero or negative for an invalid stay.
    pub nights: i64,
    pub nightly_rate: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl PricingBreakdown {
    /// Copy with the money fields rounded to 2 decimal places for
    /// display.
    pub fn rounded(&self) -> PricingBreakdown {
        PricingBreakdown {
            nights: self.nights,
            nightly_rate: round2(self.nightly_rate),
            subtotal: round2(self.subtotal),
            tax: round2(self.tax),
            total: round2(self.total),
        }
    }
}

/// Compute the cost breakdown for a stay at the given nightly rate.
///
/// `nights` carries the raw date difference; the money fields are all
/// zero when the stay is not positive.
pub fn quote(check_in: NaiveDate, check_out: NaiveDate, nightly_rate: f64) -> PricingBreakdown {
    let nights = (check_out - check_in).num_days();
    let subtotal = if nights > 0 {
        nights as f64 * nightly_rate
    } else {
        0.0
    };
    let tax = subtotal * TAX_RATE;
    PricingBreakdown {
        nights,
        nightly_rate,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Round to 2 decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject stays that are not at least one night.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> StayResult<()> {
    if (check_out - check_in).num_days() < 1 {
        return Err(StayError::validation(
            "check-out date must be after check-in date",
        ));
    }
    Ok(())
}

/// Accept a guest count iff `1 <= guests <= capacity`, with a ceiling
/// of [`DEFAULT_GUEST_CAPACITY`] when the capacity is unknown. Out of
/// range is a validation failure, never a silent clamp.
pub fn validate_guests(guests: u32, capacity: Option<u32>) -> StayResult<()> {
    let ceiling = capacity.unwrap_or(DEFAULT_GUEST_CAPACITY);
    if guests < 1 || guests > ceiling {
        return Err(StayError::validation(format!(
            "number of guests must be between 1 and {ceiling}"
        )));
    }
    Ok(())
}
