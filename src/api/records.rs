//! Panel Data Commands
//!
//! Authenticated reads for the dashboard panels. Errors come back as the
//! text to show in the panel; a 401 also ends the session.

use casino_access::{
    AuthError, DashboardMetrics, GamingPackage, GamingSessionPage, MemberPage, MemberQuery, RewardItem, SessionQuery,
};
use tracing::warn;

use super::auth::expire_session;
use super::{client, sessions, with_timeout};
use crate::store::AppStore;

fn settle<T>(store: AppStore, result: Result<T, AuthError>) -> Result<T, String> {
    result.map_err(|err| {
        if matches!(err, AuthError::Rejected { status: 401, .. }) {
            expire_session(store);
        } else {
            warn!(error = %err, "panel data request failed");
        }
        err.user_message()
    })
}

pub async fn dashboard_metrics(store: AppStore) -> Result<DashboardMetrics, String> {
    let api = client();
    let token = sessions().access_token().map_err(|e| e.user_message())?;
    let result = with_timeout(api.records(token).dashboard_metrics()).await;
    settle(store, result)
}

pub async fn members(store: AppStore, query: MemberQuery) -> Result<MemberPage, String> {
    let api = client();
    let token = sessions().access_token().map_err(|e| e.user_message())?;
    let result = with_timeout(api.records(token).members(&query)).await;
    settle(store, result)
}

pub async fn gaming_sessions(store: AppStore, query: SessionQuery) -> Result<GamingSessionPage, String> {
    let api = client();
    let token = sessions().access_token().map_err(|e| e.user_message())?;
    let result = with_timeout(api.records(token).gaming_sessions(&query)).await;
    settle(store, result)
}

pub async fn gaming_packages(store: AppStore) -> Result<Vec<GamingPackage>, String> {
    let api = client();
    let token = sessions().access_token().map_err(|e| e.user_message())?;
    let result = with_timeout(api.records(token).gaming_packages()).await;
    settle(store, result)
}

pub async fn rewards(store: AppStore) -> Result<Vec<RewardItem>, String> {
    let api = client();
    let token = sessions().access_token().map_err(|e| e.user_message())?;
    let result = with_timeout(api.records(token).rewards()).await;
    settle(store, result)
}
