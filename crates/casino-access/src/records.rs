//! Console Records
//!
//! Bearer-authenticated reads that feed the dashboard panels. Requests go
//! through the same transport and error mapping as the auth gateway.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::AuthError;
use crate::gateway::{ApiRequest, AuthClient, HttpTransport, Method};
use crate::models::{DashboardMetrics, GamingPackage, GamingSessionPage, Member, MemberPage, RewardItem};

pub const DASHBOARD_METRICS_PATH: &str = "/api/dashboard/metrics";
pub const MEMBERS_PATH: &str = "/api/members";
pub const GAMING_SESSIONS_PATH: &str = "/api/gaming/sessions";
pub const GAMING_PACKAGES_PATH: &str = "/api/gaming/packages";
pub const REWARDS_PATH: &str = "/api/rewards";

/// Filters for `GET /api/members`; unset fields are left to the server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub tier: Option<String>,
    /// Matches name, email or member number
    pub search: Option<String>,
}

impl MemberQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    pub fn page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = Some(skip);
        self.limit = Some(limit);
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        push_text(&mut params, "tier", self.tier.as_deref());
        push_text(&mut params, "search", self.search.as_deref());
        params
    }
}

/// Filters for `GET /api/gaming/sessions`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// `active`, `completed` or `suspended`
    pub status: Option<String>,
}

impl SessionQuery {
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        push_text(&mut params, "status", self.status.as_deref());
        params
    }
}

/// Blank text filters are dropped rather than sent empty.
fn push_text(params: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        params.push((name, value.to_string()));
    }
}

fn with_query(url: String, params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return url;
    }
    let query = params
        .iter()
        .map(|(name, value)| format!("{name}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

/// Reads made on behalf of one access token
#[derive(Debug)]
pub struct RecordsClient<'a, T> {
    client: &'a AuthClient<T>,
    access_token: String,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn records(&self, access_token: impl Into<String>) -> RecordsClient<'_, T> {
        RecordsClient { client: self, access_token: access_token.into() }
    }
}

impl<T: HttpTransport> RecordsClient<'_, T> {
    pub async fn dashboard_metrics(&self) -> Result<DashboardMetrics, AuthError> {
        self.get(self.client.config().endpoint(DASHBOARD_METRICS_PATH), "Failed to load dashboard metrics")
            .await
    }

    pub async fn members(&self, query: &MemberQuery) -> Result<MemberPage, AuthError> {
        let url = with_query(self.client.config().endpoint(MEMBERS_PATH), &query.params());
        self.get(url, "Failed to load members").await
    }

    pub async fn member(&self, member_id: &str) -> Result<Member, AuthError> {
        let path = format!("{MEMBERS_PATH}/{}", utf8_percent_encode(member_id, NON_ALPHANUMERIC));
        self.get(self.client.config().endpoint(&path), "Failed to load member").await
    }

    pub async fn gaming_sessions(&self, query: &SessionQuery) -> Result<GamingSessionPage, AuthError> {
        let url = with_query(self.client.config().endpoint(GAMING_SESSIONS_PATH), &query.params());
        self.get(url, "Failed to load gaming sessions").await
    }

    pub async fn gaming_packages(&self) -> Result<Vec<GamingPackage>, AuthError> {
        self.get(self.client.config().endpoint(GAMING_PACKAGES_PATH), "Failed to load gaming packages")
            .await
    }

    pub async fn rewards(&self) -> Result<Vec<RewardItem>, AuthError> {
        self.get(self.client.config().endpoint(REWARDS_PATH), "Failed to load rewards").await
    }

    async fn get<R: DeserializeOwned>(&self, url: String, fallback: &str) -> Result<R, AuthError> {
        let request = ApiRequest {
            method: Method::Get,
            url,
            bearer: Some(self.access_token.clone()),
            body: None,
        };
        self.client.execute(request, fallback).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{client, ScriptedTransport};

    const METRICS: &str = r#"{
        "total_members": 1520,
        "members_by_tier": {"Ruby": 900, "Sapphire": 400, "Diamond": 200, "VIP": 20},
        "active_sessions": 37,
        "daily_revenue": 18250.0,
        "weekly_revenue": 96400.5,
        "monthly_revenue": 402300.0,
        "top_games": [{"game_type": "Baccarat", "sessions": 120, "revenue": 54000.0}],
        "recent_registrations": 6
    }"#;

    #[tokio::test]
    async fn test_dashboard_metrics_sends_bearer() {
        let transport = ScriptedTransport::default().respond(200, METRICS);
        let api = client(transport.clone());

        let metrics = api.records("tok").dashboard_metrics().await.unwrap();
        assert_eq!(metrics.total_members, 1520);
        assert_eq!(metrics.members_by_tier["VIP"], 20);
        assert_eq!(metrics.top_games[0].game_type, "Baccarat");

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/dashboard/metrics");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_members_query_is_encoded() {
        let transport = ScriptedTransport::default()
            .respond(200, r#"{"members": [], "total": 0, "page": 1, "pages": 0}"#);
        let api = client(transport.clone());

        let query = MemberQuery::default().page(0, 25).tier("VIP").search("de Silva & co");
        let page = api.records("tok").members(&query).await.unwrap();
        assert!(page.members.is_empty());

        assert_eq!(
            transport.sent.borrow()[0].url,
            "http://api.test/api/members?skip=0&limit=25&tier=VIP&search=de%20Silva%20%26%20co"
        );
    }

    #[tokio::test]
    async fn test_blank_filters_are_omitted() {
        let transport = ScriptedTransport::default()
            .respond(200, r#"{"members": [], "total": 0, "page": 1, "pages": 0}"#)
            .respond(200, r#"{"sessions": [], "total": 0, "page": 1, "pages": 0}"#);
        let api = client(transport.clone());
        let records = api.records("tok");

        records.members(&MemberQuery::default().search("   ")).await.unwrap();
        records.gaming_sessions(&SessionQuery::default()).await.unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].url, "http://api.test/api/members");
        assert_eq!(sent[1].url, "http://api.test/api/gaming/sessions");
    }

    #[tokio::test]
    async fn test_member_page_and_sessions_decode() {
        let transport = ScriptedTransport::default()
            .respond(
                200,
                r#"{"members": [{"id": "m-1", "member_number": "BC000001", "first_name": "Ayesha",
                    "last_name": "Fernando", "tier": "VIP", "points_balance": 5400}],
                    "total": 51, "page": 1, "pages": 2}"#,
            )
            .respond(
                200,
                r#"{"sessions": [{"id": "s-1", "member_id": "m-1", "member_name": "Ayesha Fernando",
                    "session_start": "2024-05-01T20:00:00", "game_type": "Roulette",
                    "buy_in_amount": 1000, "status": "active"}],
                    "total": 1, "page": 1, "pages": 1}"#,
            );
        let api = client(transport.clone());
        let records = api.records("tok");

        let page = records.members(&MemberQuery::default()).await.unwrap();
        assert_eq!(page.pages, 2);
        assert_eq!(page.members[0].full_name(), "Ayesha Fernando");

        let sessions = records.gaming_sessions(&SessionQuery::default().status("active")).await.unwrap();
        assert_eq!(sessions.sessions[0].member_name.as_deref(), Some("Ayesha Fernando"));
        assert_eq!(transport.sent.borrow()[1].url, "http://api.test/api/gaming/sessions?status=active");
    }

    #[tokio::test]
    async fn test_rewards_and_packages_are_lists() {
        let transport = ScriptedTransport::default()
            .respond(
                200,
                r#"[{"id": "r-1", "name": "Buffet for two", "category": "dining", "points_required": 2500,
                     "cash_value": 60, "stock_quantity": null}]"#,
            )
            .respond(
                200,
                r#"[{"id": "p-1", "name": "Weekend Starter", "price": 100, "credits": 120,
                     "validity_hours": 48, "tier_access": ["Ruby", "Sapphire"]}]"#,
            );
        let api = client(transport);
        let records = api.records("tok");

        let rewards = records.rewards().await.unwrap();
        assert_eq!(rewards[0].category, "dining");
        assert_eq!(rewards[0].stock_quantity, None);

        let packages = records.gaming_packages().await.unwrap();
        assert_eq!(packages[0].validity_hours, 48);
        assert_eq!(packages[0].tier_access, vec!["Ruby", "Sapphire"]);
    }

    #[tokio::test]
    async fn test_member_id_is_path_encoded() {
        let transport = ScriptedTransport::default().respond(404, r#"{"detail":"Member not found"}"#);
        let api = client(transport.clone());

        let err = api.records("tok").member("m/1").await.unwrap_err();
        assert_eq!(err.user_message(), "Member not found");
        assert_eq!(transport.sent.borrow()[0].url, "http://api.test/api/members/m%2F1");
    }

    #[tokio::test]
    async fn test_rejection_without_detail_names_the_read() {
        let transport = ScriptedTransport::default().respond(500, "Internal Server Error");
        let err = client(transport).records("tok").rewards().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load rewards");
    }
}
