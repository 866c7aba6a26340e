//! Reward points for purchase receipts.
//!
//! The [`receipts`] module holds the scoring rules and the in-memory store; the remaining
//! modules carry the configuration, telemetry, and error plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
