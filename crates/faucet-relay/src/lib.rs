//! Faucet Relay - HTTP relay in front of a token-distribution service
//!
//! This crate provides an HTTP server that relays faucet claims:
//! 1. A client submits a wallet address to `POST /api/claim`
//! 2. The relay validates that the address is syntactically well formed
//! 3. The claim is forwarded to the configured downstream distribution endpoint
//! 4. The downstream outcome is relayed back to the client unchanged, with
//!    transport-level failures collapsed into a generic internal error
//!
//! The relay keeps no state between requests and enforces no rate limits; the
//! downstream service is the authority on whether a claim succeeds.

pub mod address;
pub mod config;
pub mod downstream;
pub mod error;
pub mod http;

pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
