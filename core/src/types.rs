//! Leaderboard DTOs and the normalized record.
//!
//! # Design
//! The wire types mirror the upstream payload but are defined independently
//! of the mock-server crate; integration tests catch schema drift. Fields the
//! widget does not use are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Raw leaderboard body: `{ "pages": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardResponse {
    pub pages: Vec<LeaderboardPage>,
}

/// One raw leaderboard entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardPage {
    pub amount: f64,
    pub owner: String,
}

/// A leaderboard entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundraiserRecord {
    /// Amount raised, always with exactly two decimal places.
    pub amount: String,
    /// Page owner, verbatim.
    pub name: String,
}

impl From<LeaderboardPage> for FundraiserRecord {
    fn from(page: LeaderboardPage) -> Self {
        Self {
            amount: to_fixed_2(page.amount),
            name: page.owner,
        }
    }
}

/// Two-decimal rendering of an amount.
///
/// Exact midpoints round away from zero and `-0.0` prints as `0.00`, which
/// `{:.2}` alone does not do (it rounds ties to even and keeps the sign).
fn to_fixed_2(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    // A value sits exactly between two cents only if it is an odd multiple
    // of 1/8 (x.125, x.375, x.625, x.875). Scaling by 8 and 100 is exact.
    let eighths = abs * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (abs * 100.0).ceil() as u128;
        return format!("{sign}{}.{:02}", cents / 100, cents % 100);
    }
    format!("{sign}{abs:.2}")
}
