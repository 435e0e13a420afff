//! Integration tests for gateway behavior against an unreachable
//! backend.
//!
//! TCP port 9 (discard) on localhost refuses connections immediately,
//! which makes the transport-failure paths deterministic without a
//! mock server.

use chrono::{Days, NaiveDate, Utc};
use stayport_core::error::StayError;
use stayport_core::gateway::{AuthGateway, BookingDesk, HotelCatalog, Inventory};
use stayport_core::models::booking::{Booking, BookingStatus, CreateBooking};
use stayport_core::models::hotel::{CreateHotel, HotelFilter, UpdateHotel};
use stayport_core::models::room::{CreateRoom, RoomType};
use stayport_core::models::session::Session;
use stayport_core::models::user::{LoginRequest, RegisterRequest, Role, User};
use stayport_core::source::DataSource;
use stayport_gateway::{GatewayConfig, RestGateway};

fn unreachable_gateway() -> RestGateway {
    RestGateway::new(GatewayConfig {
        base_url: "http://127.0.0.1:9/api".into(),
    })
}

fn test_session() -> Session {
    Session::new(
        "test-token".into(),
        User {
            id: 1,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role: Role::User,
        },
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn upcoming_booking() -> Booking {
    let check_in = Utc::now().date_naive() + Days::new(30);
    Booking {
        id: 9001,
        hotel_id: 1,
        room_id: 102,
        check_in_date: check_in,
        check_out_date: check_in + Days::new(3),
        guests: 2,
        special_requests: None,
        total_price: 858.0,
        status: BookingStatus::Confirmed,
    }
}

// ---------------------------------------------------------------------------
// Reads degrade silently to the substitute dataset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_hotels_serves_fallback() {
    let gw = unreachable_gateway();
    let result = gw
        .list_hotels(None, &HotelFilter::default())
        .await
        .unwrap();

    assert_eq!(result.source, DataSource::Fallback);
    assert!(!result.data.is_empty());
}

#[tokio::test]
async fn fallback_hotel_ids_are_stable_across_calls() {
    let gw = unreachable_gateway();
    let first = gw.list_hotels(None, &HotelFilter::default()).await.unwrap();
    let second = gw.list_hotels(None, &HotelFilter::default()).await.unwrap();

    let ids = |hotels: &[stayport_core::models::hotel::Hotel]| {
        hotels.iter().map(|h| h.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first.data), ids(&second.data));
}

#[tokio::test]
async fn get_hotel_serves_fallback_record() {
    let gw = unreachable_gateway();
    let result = gw.get_hotel(None, 2).await.unwrap();

    assert!(result.is_fallback());
    assert_eq!(result.data.id, 2);
}

#[tokio::test]
async fn list_rooms_serves_fallback() {
    let gw = unreachable_gateway();
    let result = gw.list_rooms(None, 3).await.unwrap();

    assert!(result.is_fallback());
    assert!(result.data.iter().all(|r| r.hotel_id == 3));
}

#[tokio::test]
async fn booking_lists_serve_fallback() {
    let gw = unreachable_gateway();
    let session = test_session();

    let mine = gw.list_my_bookings(&session).await.unwrap();
    assert!(mine.is_fallback());
    assert!(!mine.data.is_empty());

    let all = gw.list_all_bookings(&session).await.unwrap();
    assert!(all.is_fallback());
}

// ---------------------------------------------------------------------------
// Auth never fabricates a session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_fails_service_unavailable() {
    let gw = unreachable_gateway();
    let err = gw
        .login(LoginRequest {
            email: "alice@example.com".into(),
            password: "hunter2hunter2".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StayError::ServiceUnavailable { .. }));
}

#[tokio::test]
async fn register_fails_service_unavailable() {
    let gw = unreachable_gateway();
    let err = gw
        .register(RegisterRequest {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "hunter2hunter2".into(),
            role: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StayError::ServiceUnavailable { .. }));
}

// ---------------------------------------------------------------------------
// Mutations return tagged placeholders, validation runs first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_booking_returns_tagged_placeholder() {
    let gw = unreachable_gateway();
    let session = test_session();
    let input = CreateBooking {
        hotel_id: 1,
        room_id: 102,
        check_in_date: date(2026, 6, 1),
        check_out_date: date(2026, 6, 4),
        guests: 2,
        special_requests: None,
        total_price: 660.0,
    };

    let result = gw.create_booking(&session, &input, Some(3)).await.unwrap();
    // Fallback tag means nothing was persisted.
    assert!(result.is_fallback());
}

#[tokio::test]
async fn create_booking_rejects_inverted_dates_before_network() {
    let gw = unreachable_gateway();
    let session = test_session();
    let input = CreateBooking {
        hotel_id: 1,
        room_id: 102,
        check_in_date: date(2026, 6, 4),
        check_out_date: date(2026, 6, 1),
        guests: 2,
        special_requests: None,
        total_price: 660.0,
    };

    let err = gw
        .create_booking(&session, &input, Some(3))
        .await
        .unwrap_err();
    assert!(matches!(err, StayError::Validation { .. }));
}

#[tokio::test]
async fn create_booking_rejects_same_day_stay() {
    let gw = unreachable_gateway();
    let session = test_session();
    let input = CreateBooking {
        hotel_id: 1,
        room_id: 102,
        check_in_date: date(2026, 6, 1),
        check_out_date: date(2026, 6, 1),
        guests: 1,
        special_requests: None,
        total_price: 0.0,
    };

    assert!(matches!(
        gw.create_booking(&session, &input, None).await,
        Err(StayError::Validation { .. })
    ));
}

#[tokio::test]
async fn create_booking_rejects_guest_overflow() {
    let gw = unreachable_gateway();
    let session = test_session();
    let mut input = CreateBooking {
        hotel_id: 1,
        room_id: 102,
        check_in_date: date(2026, 6, 1),
        check_out_date: date(2026, 6, 4),
        guests: 4,
        special_requests: None,
        total_price: 660.0,
    };

    // Over the room's known capacity.
    assert!(gw.create_booking(&session, &input, Some(3)).await.is_err());

    // Unknown capacity assumes a ceiling of 4.
    assert!(gw.create_booking(&session, &input, None).await.is_ok());
    input.guests = 5;
    assert!(gw.create_booking(&session, &input, None).await.is_err());
}

#[tokio::test]
async fn cancel_upcoming_booking_degrades_to_placeholder() {
    let gw = unreachable_gateway();
    let session = test_session();

    let result = gw
        .cancel_booking(&session, &upcoming_booking())
        .await
        .unwrap();
    assert!(result.is_fallback());
}

#[tokio::test]
async fn cancel_non_upcoming_booking_rejected() {
    let gw = unreachable_gateway();
    let session = test_session();

    let mut completed = upcoming_booking();
    completed.check_in_date = date(2020, 1, 1);
    completed.check_out_date = date(2020, 1, 4);
    assert!(matches!(
        gw.cancel_booking(&session, &completed).await,
        Err(StayError::Validation { .. })
    ));

    let mut cancelled = upcoming_booking();
    cancelled.status = BookingStatus::Cancelled;
    assert!(matches!(
        gw.cancel_booking(&session, &cancelled).await,
        Err(StayError::Validation { .. })
    ));
}

#[tokio::test]
async fn admin_mutations_return_tagged_placeholders() {
    let gw = unreachable_gateway();
    let session = test_session();

    let hotel = gw
        .create_hotel(
            &session,
            &CreateHotel {
                name: "New Hotel".into(),
                location: "Nowhere".into(),
                description: "".into(),
                rating: 0.0,
                price_per_night: 100.0,
                image_url: None,
                amenities: vec![],
            },
        )
        .await
        .unwrap();
    assert!(hotel.is_fallback());

    let updated = gw
        .update_hotel(
            &session,
            1,
            &UpdateHotel {
                price_per_night: Some(130.0),
                ..UpdateHotel::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_fallback());

    let room = gw
        .create_room(
            &session,
            1,
            &CreateRoom {
                room_type: RoomType::Deluxe,
                price_per_night: Some(180.0),
                capacity: 2,
                available: true,
                description: None,
            },
        )
        .await
        .unwrap();
    assert!(room.is_fallback());
}
