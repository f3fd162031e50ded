//! HTTP transport types and the injected transport capability.
//!
//! # Design
//! Requests and responses are plain data. `LeaderboardClient` builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! an `HttpTransport` sits in between and performs the actual round-trip.
//! A transport only reports failures that prevented a response from
//! existing. Status interpretation belongs to the client, so a 404 or 500
//! comes back as an ordinary `HttpResponse`.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP method for a request. The leaderboard is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one `HttpRequest`.
///
/// Implementations must return `Ok` for every response that arrived,
/// whatever its status, and `ApiError::TransportFailure` otherwise.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Default transport backed by a blocking `ureq` agent.
///
/// The call runs on tokio's blocking pool so the caller's task is never
/// parked on socket I/O.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::TransportFailure(e.to_string()))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = match request.method {
        HttpMethod::Get => agent.get(&request.path),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let mut response = builder
        .call()
        .map_err(|e| ApiError::TransportFailure(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::TransportFailure(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
