//! Data source adapter: one request, one projection.

use async_trait::async_trait;

use crate::client::LeaderboardClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpTransport, UreqTransport};
use crate::types::FundraiserRecord;

/// Something that can produce the fundraiser list once per call.
///
/// `ListView` depends on this rather than on `LeaderboardAdapter` directly,
/// which lets tests drive the view with in-process sources.
#[async_trait]
pub trait FundraiserSource: Send + Sync {
    async fn fetch_fundraisers(&self) -> Result<Vec<FundraiserRecord>, ApiError>;
}

/// Runs `LeaderboardClient`'s request through an injected transport.
///
/// Each call issues exactly one request. Nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct LeaderboardAdapter<T> {
    client: LeaderboardClient,
    transport: T,
}

impl<T: HttpTransport> LeaderboardAdapter<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            client: LeaderboardClient::new(config),
            transport,
        }
    }
}

impl Default for LeaderboardAdapter<UreqTransport> {
    fn default() -> Self {
        Self::new(ApiConfig::default(), UreqTransport::new())
    }
}

#[async_trait]
impl<T: HttpTransport> FundraiserSource for LeaderboardAdapter<T> {
    async fn fetch_fundraisers(&self) -> Result<Vec<FundraiserRecord>, ApiError> {
        let request = self.client.build_fetch_fundraisers();
        tracing::debug!(url = %request.path, "fetching fundraisers");
        let response = self.transport.execute(request).await?;
        let records = self.client.parse_fetch_fundraisers(response)?;
        tracing::debug!(count = records.len(), "fundraisers fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replays one canned result and records every request it sees.
    struct CannedTransport {
        result: Result<HttpResponse, ApiError>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(result: Result<HttpResponse, ApiError>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn ok(status: u16, body: &str) -> Self {
            Self::new(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }))
        }
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request);
            self.result.clone()
        }
    }

    fn adapter(transport: CannedTransport) -> LeaderboardAdapter<CannedTransport> {
        LeaderboardAdapter::new(ApiConfig::new("http://mock", "app", "7"), transport)
    }

    #[tokio::test]
    async fn issues_exactly_one_get() {
        let adapter = adapter(CannedTransport::ok(200, r#"{"pages":[]}"#));
        adapter.fetch_fundraisers().await.unwrap();

        let seen = adapter.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].path, "http://mock/app/v1/charity/7/leaderboard");
    }

    #[tokio::test]
    async fn projects_pages_in_order() {
        let adapter = adapter(CannedTransport::ok(
            200,
            r#"{"pages":[{"amount":3,"owner":"C"},{"amount":1.5,"owner":"A"},{"amount":2,"owner":"B"}]}"#,
        ));
        let records = adapter.fetch_fundraisers().await.unwrap();
        let flat: Vec<_> = records
            .iter()
            .map(|r| (r.amount.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(flat, [("3.00", "C"), ("1.50", "A"), ("2.00", "B")]);
    }

    #[tokio::test]
    async fn non_success_is_data_unavailable() {
        let adapter = adapter(CannedTransport::ok(404, ""));
        let err = adapter.fetch_fundraisers().await.unwrap_err();
        assert_eq!(err, ApiError::DataUnavailable);
        assert_eq!(err.to_string(), "Data Unavailable");
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        let failure = ApiError::TransportFailure("dns error".to_string());
        let adapter = adapter(CannedTransport::new(Err(failure.clone())));
        assert_eq!(adapter.fetch_fundraisers().await.unwrap_err(), failure);
    }

    #[tokio::test]
    async fn each_call_hits_the_transport() {
        let adapter = adapter(CannedTransport::ok(200, r#"{"pages":[]}"#));
        adapter.fetch_fundraisers().await.unwrap();
        adapter.fetch_fundraisers().await.unwrap();
        assert_eq!(adapter.transport.seen.lock().unwrap().len(), 2);
    }
}
