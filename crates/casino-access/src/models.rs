//! Access Models
//!
//! Data structures exchanged with the auth API and persisted in the session.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Grants every permission when present in a user's set
pub const WILDCARD_PERMISSION: &str = "*";

// ========================
// Role
// ========================

/// Coarse identity category of an operator.
///
/// Unknown role names from the API are kept verbatim in `Other` so they
/// round-trip through the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    GeneralAdmin,
    Manager,
    Supervisor,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "SuperAdmin",
            Role::GeneralAdmin => "GeneralAdmin",
            Role::Manager => "Manager",
            Role::Supervisor => "Supervisor",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SuperAdmin" => Role::SuperAdmin,
            "GeneralAdmin" => Role::GeneralAdmin,
            "Manager" => Role::Manager,
            "Supervisor" => Role::Supervisor,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================
// Permissions
// ========================

/// Fine-grained capability tokens such as `members:read`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.contains(WILDCARD_PERMISSION)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Wildcard, or at least one of `required`.
    pub fn allows_any<S: AsRef<str>>(&self, required: &[S]) -> bool {
        self.is_wildcard() || required.iter().any(|token| self.contains(token.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ========================
// User & Session
// ========================

/// Authenticated operator as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl User {
    /// First word of the full name, falling back to the username.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.username)
    }

    /// Single uppercase letter for avatars.
    pub fn initial(&self) -> char {
        self.first_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Bearer tokens held for the session; no expiry is tracked client-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub tokens: SessionTokens,
}

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Both fields must be filled before a request is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "username" });
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField { field: "password" });
        }
        Ok(())
    }
}

/// Body of a successful `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user_info: User,
}

/// Body of a successful `POST /api/auth/refresh`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

// ========================
// Console Records
// ========================

/// Body of `GET /api/dashboard/metrics`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardMetrics {
    pub total_members: u64,
    /// Active members per tier name
    #[serde(default)]
    pub members_by_tier: BTreeMap<String, u64>,
    pub active_sessions: u64,
    pub daily_revenue: f64,
    pub weekly_revenue: f64,
    pub monthly_revenue: f64,
    #[serde(default)]
    pub top_games: Vec<GameSummary>,
    #[serde(default)]
    pub recent_registrations: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameSummary {
    pub game_type: String,
    pub sessions: u64,
    #[serde(default)]
    pub revenue: f64,
}

/// Casino member as listed by `GET /api/members`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: String,
    pub member_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub tier: String,
    #[serde(default)]
    pub points_balance: f64,
    #[serde(default)]
    pub lifetime_spend: f64,
    #[serde(default)]
    pub last_visit: Option<NaiveDateTime>,
    #[serde(default)]
    pub kyc_verified: bool,
    #[serde(default)]
    pub self_excluded: bool,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamingSession {
    pub id: String,
    pub member_id: String,
    /// Filled in by the API when the member exists
    #[serde(default)]
    pub member_name: Option<String>,
    pub session_start: NaiveDateTime,
    #[serde(default)]
    pub session_end: Option<NaiveDateTime>,
    pub game_type: String,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub machine_number: Option<String>,
    pub buy_in_amount: f64,
    #[serde(default)]
    pub cash_out_amount: Option<f64>,
    #[serde(default)]
    pub net_result: Option<f64>,
    #[serde(default)]
    pub points_earned: f64,
    /// `active`, `completed` or `suspended`
    pub status: String,
}

impl GamingSession {
    /// Table or machine the session was played on
    pub fn location(&self) -> Option<&str> {
        self.table_number.as_deref().or(self.machine_number.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamingSessionPage {
    pub sessions: Vec<GamingSession>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamingPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub credits: f64,
    pub validity_hours: u32,
    #[serde(default)]
    pub tier_access: Vec<String>,
}

/// Redeemable catalogue entry from `GET /api/rewards`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `dining`, `accommodation`, `gaming` or `merchandise`
    pub category: String,
    pub points_required: f64,
    #[serde(default)]
    pub cash_value: f64,
    #[serde(default)]
    pub tier_access: Vec<String>,
    /// None means unlimited
    #[serde(default)]
    pub stock_quantity: Option<u32>,
}
