//! Error types for the leaderboard adapter.
//!
//! # Design
//! Exactly three failure kinds exist. The upstream status code and any error
//! payload are dropped on the floor: every non-2xx response is the same
//! `DataUnavailable`. The view collapses all three into one generic state, so
//! the variants exist for logging and tests rather than for the user.

use thiserror::Error;

/// Errors returned by the adapter and its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Data Unavailable")]
    DataUnavailable,

    /// The body was not valid JSON or did not have the leaderboard shape.
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("transport failure: {0}")]
    TransportFailure(String),
}
