//! Stateless request builder and response parser for the leaderboard API.
//!
//! # Design
//! `LeaderboardClient` holds only its `ApiConfig`. The single operation is
//! split into `build_fetch_fundraisers`, which produces an `HttpRequest`,
//! and `parse_fetch_fundraisers`, which consumes an `HttpResponse`. The
//! round-trip in between is someone else's job, keeping this module
//! deterministic and free of I/O.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FundraiserRecord, LeaderboardResponse};

#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    config: ApiConfig,
}

impl LeaderboardClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn build_fetch_fundraisers(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.config.leaderboard_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
        }
    }

    /// Turn a leaderboard response into records, preserving upstream order.
    pub fn parse_fetch_fundraisers(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<FundraiserRecord>, ApiError> {
        check_status(&response)?;
        let body: LeaderboardResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::ParseFailure(e.to_string()))?;
        Ok(body.pages.into_iter().map(FundraiserRecord::from).collect())
    }
}

impl Default for LeaderboardClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Any non-2xx is `DataUnavailable`; the status itself goes no further.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(status = response.status, "leaderboard request failed");
    Err(ApiError::DataUnavailable)
}
