//! Stayport Core — Domain models, error taxonomy, pricing calculator,
//! and the gateway trait seams shared across all crates.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pricing;
pub mod source;

pub use error::{StayError, StayResult};
pub use source::{DataSource, Sourced};
