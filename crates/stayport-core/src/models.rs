//! Domain models for Stayport.
//!
//! These are the wire types shared across all crates. Field names are
//! serialized in camelCase to match the backend's JSON contract.

pub mod amenity;
pub mod booking;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod session;
pub mod user;
