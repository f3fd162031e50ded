//! Stand-in for the charity leaderboard endpoint.
//!
//! Serves `/{app_id}/v1/charity/{charity_id}/leaderboard` from a fixed
//! [`Scenario`], so clients can be exercised against a live socket with a
//! known fixture, a forced error status, or a hand-written body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use axum::http::StatusCode;

/// One leaderboard entry as the upstream API reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub amount: f64,
    pub owner: String,
}

/// Top-level leaderboard payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub pages: Vec<Page>,
}

impl Leaderboard {
    /// The three-entry leaderboard used across the test suites.
    pub fn fixture() -> Self {
        let page = |amount: f64, owner: &str| Page {
            amount,
            owner: owner.to_string(),
        };
        Self {
            pages: vec![
                page(37104.00, "Campbell Josephine and Libby Naylor"),
                page(28827.83, "Jenny payne"),
                page(17350.0, "Simon Gillespie"),
            ],
        }
    }
}

/// What the leaderboard route answers with.
#[derive(Clone, Debug)]
pub enum Scenario {
    /// 200 with the given leaderboard serialized as JSON.
    Leaderboard(Leaderboard),
    /// Arbitrary status and body, e.g. a 404 or a malformed 200.
    Raw { status: StatusCode, body: String },
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Leaderboard(Leaderboard::fixture())
    }
}

/// What the server saw for one leaderboard request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub app_id: String,
    pub charity_id: String,
    pub content_type: Option<String>,
}

/// Shared record of every leaderboard request the router handled.
#[derive(Clone, Debug, Default)]
pub struct RequestLog(Arc<RwLock<Vec<RecordedRequest>>>);

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.0.read().await.clone()
    }
}

#[derive(Clone)]
struct AppState {
    scenario: Arc<Scenario>,
    log: RequestLog,
}

/// Router serving the default fixture.
pub fn app() -> Router {
    app_with(Scenario::default())
}

pub fn app_with(scenario: Scenario) -> Router {
    app_with_log(scenario, RequestLog::new())
}

/// Like [`app_with`], recording each request into `log`.
pub fn app_with_log(scenario: Scenario, log: RequestLog) -> Router {
    Router::new()
        .route(
            "/{app_id}/v1/charity/{charity_id}/leaderboard",
            get(leaderboard),
        )
        .with_state(AppState {
            scenario: Arc::new(scenario),
            log,
        })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Scenario::default()).await
}

pub async fn run_with(listener: TcpListener, scenario: Scenario) -> Result<(), std::io::Error> {
    run_with_log(listener, scenario, RequestLog::new()).await
}

pub async fn run_with_log(
    listener: TcpListener,
    scenario: Scenario,
    log: RequestLog,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_log(scenario, log)).await
}

async fn leaderboard(
    State(state): State<AppState>,
    Path((app_id, charity_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    tracing::debug!(%app_id, %charity_id, "leaderboard requested");
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    state.log.0.write().await.push(RecordedRequest {
        app_id,
        charity_id,
        content_type,
    });

    match state.scenario.as_ref() {
        Scenario::Leaderboard(board) => Json(board.clone()).into_response(),
        Scenario::Raw { status, body } => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
    }
}
