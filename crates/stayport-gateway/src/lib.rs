//! Stayport Gateway — REST client for the booking backend with
//! graceful degradation.
//!
//! This crate provides:
//! - Gateway configuration ([`GatewayConfig`])
//! - The [`RestGateway`] implementation of the `stayport-core` gateway
//!   traits
//! - The substitute dataset served when the backend is unreachable
//! - Error types ([`GatewayError`])

mod client;
mod config;
mod error;
pub mod fallback;

pub use client::RestGateway;
pub use config::GatewayConfig;
pub use error::GatewayError;
