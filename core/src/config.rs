//! Fixed endpoint configuration.
//!
//! The widget talks to a single leaderboard endpoint whose coordinates are
//! compile-time constants. `ApiConfig::new` exists so tests can aim the
//! client at a local mock server.

pub const APP_ID: &str = "put_your_appId_here";
pub const CHARITY_ID: &str = "put_your_charityId_here";
pub const BASE_URL: &str = "https://api.justgiving.com";

/// Prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "£";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub app_id: String,
    pub charity_id: String,
}

impl ApiConfig {
    pub fn new(base_url: &str, app_id: &str, charity_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id: app_id.to_string(),
            charity_id: charity_id.to_string(),
        }
    }

    /// Path of the leaderboard resource, relative to `base_url`.
    pub fn leaderboard_path(&self) -> String {
        format!("/{}/v1/charity/{}/leaderboard", self.app_id, self.charity_id)
    }

    pub fn leaderboard_url(&self) -> String {
        format!("{}{}", self.base_url, self.leaderboard_path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(BASE_URL, APP_ID, CHARITY_ID)
    }
}
