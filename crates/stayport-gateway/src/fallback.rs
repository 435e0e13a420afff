//! Substitute dataset served when the live backend is unreachable.
//!
//! Identifiers are stable so UI state built against fallback data
//! stays consistent across calls. The records match the live response
//! shapes exactly.

use chrono::NaiveDate;
use stayport_core::models::amenity::Amenity;
use stayport_core::models::booking::{Booking, BookingStatus};
use stayport_core::models::hotel::Hotel;
use stayport_core::models::room::{Room, RoomType};

fn amenity(name: &str, description: &str) -> Amenity {
    Amenity {
        name: name.into(),
        description: description.into(),
        available: true,
    }
}

/// The fixed sample hotel list.
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: 1,
            name: "Grand Meridian".into(),
            location: "Lisbon, Portugal".into(),
            description: "Riverside hotel with rooftop pool and old-town views.".into(),
            rating: 4.7,
            price_per_night: 210.0,
            image_url: Some("/images/grand-meridian.jpg".into()),
            amenities: vec![
                amenity("Pool", "Rooftop infinity pool"),
                amenity("WiFi", "Free high-speed WiFi"),
                amenity("Spa", "Full-service spa"),
            ],
        },
        Hotel {
            id: 2,
            name: "Alpenrose Lodge".into(),
            location: "Innsbruck, Austria".into(),
            description: "Family-run lodge at the foot of the Nordkette.".into(),
            rating: 4.5,
            price_per_night: 145.0,
            image_url: Some("/images/alpenrose-lodge.jpg".into()),
            amenities: vec![
                amenity("Breakfast", "Alpine breakfast buffet"),
                amenity("Sauna", "Finnish sauna"),
            ],
        },
        Hotel {
            id: 3,
            name: "Bayfront Suites".into(),
            location: "San Diego, USA".into(),
            description: "All-suite hotel on the marina boardwalk.".into(),
            rating: 4.2,
            price_per_night: 189.0,
            image_url: Some("/images/bayfront-suites.jpg".into()),
            amenities: vec![
                amenity("Gym", "24h fitness center"),
                amenity("Parking", "On-site parking"),
                amenity("WiFi", "Free high-speed WiFi"),
            ],
        },
        Hotel {
            id: 4,
            name: "The Old Mill Inn".into(),
            location: "York, United Kingdom".into(),
            description: "Converted 18th-century mill beside the river Ouse.".into(),
            rating: 4.8,
            price_per_night: 120.0,
            image_url: None,
            amenities: vec![amenity("Breakfast", "Full English breakfast")],
        },
    ]
}

/// Sample hotel by id; falls back to the first record for unknown ids
/// so browsing never dead-ends in demo mode.
pub fn sample_hotel(id: i64) -> Hotel {
    let mut hotels = sample_hotels();
    let pos = hotels.iter().position(|h| h.id == id).unwrap_or(0);
    hotels.swap_remove(pos)
}

/// The fixed sample room list for a hotel.
pub fn sample_rooms(hotel_id: i64) -> Vec<Room> {
    vec![
        Room {
            id: hotel_id * 100 + 1,
            hotel_id,
            room_type: RoomType::Standard,
            price_per_night: None,
            capacity: 2,
            available: true,
            description: Some("Queen bed, city view".into()),
        },
        Room {
            id: hotel_id * 100 + 2,
            hotel_id,
            room_type: RoomType::Deluxe,
            price_per_night: Some(260.0),
            capacity: 3,
            available: true,
            description: Some("King bed, balcony".into()),
        },
        Room {
            id: hotel_id * 100 + 3,
            hotel_id,
            room_type: RoomType::Suite,
            price_per_night: Some(420.0),
            capacity: 4,
            available: false,
            description: Some("Two-room suite with lounge".into()),
        },
    ]
}

/// The fixed sample booking list.
pub fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 9001,
            hotel_id: 1,
            room_id: 102,
            check_in_date: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            guests: 2,
            special_requests: Some("Late check-in".into()),
            total_price: 858.0,
            status: BookingStatus::Confirmed,
        },
        Booking {
            id: 9002,
            hotel_id: 3,
            room_id: 301,
            check_in_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2025, 2, 6).unwrap(),
            guests: 1,
            special_requests: None,
            total_price: 623.7,
            status: BookingStatus::Confirmed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_ids_are_stable_and_unique() {
        let hotels = sample_hotels();
        assert!(!hotels.is_empty());
        let mut ids: Vec<i64> = hotels.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), hotels.len());
        assert_eq!(sample_hotels()[0].id, hotels[0].id);
    }

    #[test]
    fn unknown_hotel_id_falls_back_to_first() {
        assert_eq!(sample_hotel(999).id, sample_hotels()[0].id);
    }

    #[test]
    fn rooms_belong_to_requested_hotel() {
        assert!(sample_rooms(2).iter().all(|r| r.hotel_id == 2));
    }
}
