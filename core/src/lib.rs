//! Fundraiser leaderboard widget core.
//!
//! # Overview
//! Fetches a charity's fundraiser leaderboard, projects it into display
//! records and renders it through a three-state list view.
//!
//! # Design
//! - `LeaderboardClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - `HttpTransport` performs the round-trip; `UreqTransport` is the default.
//! - `LeaderboardAdapter` joins the two behind the `FundraiserSource` trait.
//! - `ListView` owns the `Pending -> Loaded | Failed` lifecycle and renders
//!   it as text.

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use adapter::{FundraiserSource, LeaderboardAdapter};
pub use client::LeaderboardClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, UreqTransport};
pub use types::{FundraiserRecord, LeaderboardPage, LeaderboardResponse};
pub use view::{ListItem, ListView, Rendered, ViewState};
