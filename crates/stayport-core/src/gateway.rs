//! Gateway trait definitions for backend data access.
//!
//! All operations are async and single-attempt. Read operations return
//! [`Sourced`] values so callers can observe whether the live backend
//! or the substitute dataset served the response. Operations that act
//! on behalf of a user take a [`Session`] reference explicitly; there
//! is no ambient credential store.

use crate::error::StayResult;
use crate::models::booking::{Booking, CreateBooking};
use crate::models::hotel::{CreateHotel, Hotel, HotelFilter, UpdateHotel};
use crate::models::room::{CreateRoom, Room};
use crate::models::session::Session;
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::source::Sourced;

// ---------------------------------------------------------------------------
// Auth (trust-sensitive: never served by fallback data)
// ---------------------------------------------------------------------------

pub trait AuthGateway: Send + Sync {
    /// Authenticate and obtain a session. Fails with
    /// `ServiceUnavailable` when the backend is unreachable — a login
    /// is never fabricated.
    fn login(&self, credentials: LoginRequest) -> impl Future<Output = StayResult<Session>> + Send;

    /// Register a new account and obtain a session for it.
    fn register(&self, input: RegisterRequest)
    -> impl Future<Output = StayResult<Session>> + Send;
}

// ---------------------------------------------------------------------------
// Catalog reads (degrade to the substitute dataset)
// ---------------------------------------------------------------------------

pub trait HotelCatalog: Send + Sync {
    fn list_hotels(
        &self,
        session: Option<&Session>,
        filter: &HotelFilter,
    ) -> impl Future<Output = StayResult<Sourced<Vec<Hotel>>>> + Send;

    fn get_hotel(
        &self,
        session: Option<&Session>,
        id: i64,
    ) -> impl Future<Output = StayResult<Sourced<Hotel>>> + Send;

    fn list_rooms(
        &self,
        session: Option<&Session>,
        hotel_id: i64,
    ) -> impl Future<Output = StayResult<Sourced<Vec<Room>>>> + Send;
}

// ---------------------------------------------------------------------------
// Booking lifecycle
// ---------------------------------------------------------------------------

pub trait BookingDesk: Send + Sync {
    /// Create a booking. Validates the input against the room capacity
    /// (when known) before any network I/O; a degraded-mode response
    /// is a tagged placeholder, not a persisted booking.
    fn create_booking(
        &self,
        session: &Session,
        input: &CreateBooking,
        capacity: Option<u32>,
    ) -> impl Future<Output = StayResult<Sourced<Booking>>> + Send;

    fn list_my_bookings(
        &self,
        session: &Session,
    ) -> impl Future<Output = StayResult<Sourced<Vec<Booking>>>> + Send;

    /// Admin view over every booking.
    fn list_all_bookings(
        &self,
        session: &Session,
    ) -> impl Future<Output = StayResult<Sourced<Vec<Booking>>>> + Send;

    /// Cancel a booking. Rejected with a validation error unless the
    /// booking is still classified `Upcoming` — the policy is enforced
    /// here, not left to the caller.
    fn cancel_booking(
        &self,
        session: &Session,
        booking: &Booking,
    ) -> impl Future<Output = StayResult<Sourced<()>>> + Send;
}

// ---------------------------------------------------------------------------
// Admin inventory
// ---------------------------------------------------------------------------

pub trait Inventory: Send + Sync {
    fn create_hotel(
        &self,
        session: &Session,
        input: &CreateHotel,
    ) -> impl Future<Output = StayResult<Sourced<Hotel>>> + Send;

    fn update_hotel(
        &self,
        session: &Session,
        id: i64,
        input: &UpdateHotel,
    ) -> impl Future<Output = StayResult<Sourced<Hotel>>> + Send;

    fn create_room(
        &self,
        session: &Session,
        hotel_id: i64,
        input: &CreateRoom,
    ) -> impl Future<Output = StayResult<Sourced<Room>>> + Send;
}
