//! Payment details and their validation.
//!
//! Payment is simulated — no gateway integration exists. The only
//! contract is that incomplete card fields are rejected as a
//! validation failure before the booking flow proceeds.

use serde::{Deserialize, Serialize};

use crate::error::{StayError, StayResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub card_holder: String,
    /// Expiry in `MM/YY` form.
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    /// Reject missing fields and card numbers that are not 16 digits
    /// (spaces ignored).
    pub fn validate(&self) -> StayResult<()> {
        if self.card_number.trim().is_empty()
            || self.card_holder.trim().is_empty()
            || self.expiry.trim().is_empty()
            || self.cvv.trim().is_empty()
        {
            return Err(StayError::validation("all payment fields are required"));
        }

        let digits: String = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(StayError::validation("card number must be 16 digits"));
        }

        Ok(())
    }
}
