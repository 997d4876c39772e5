//! Auth Gateway
//!
//! HTTP client for `/api/auth/*`. The transport is pluggable: the browser
//! build sends requests with `gloo-net`, tests script the responses.

use std::future::Future;

use async_trait::async_trait;
use futures_util::future::{select, Either};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::models::{Credentials, LoginResponse, TokenPair, User};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const REFRESH_PATH: &str = "/api/auth/refresh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    /// JSON body
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Implementations report connection failures as
/// [`AuthError::Network`] and return every HTTP status as a response.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Extract `detail` from an error body, or fall back to `fallback`.
fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.detail)
        .ok()
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Client for the remote auth API
#[derive(Debug, Clone)]
pub struct AuthClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let body = serde_json::to_string(credentials).map_err(|e| AuthError::Decode(e.to_string()))?;
        let request = ApiRequest {
            method: Method::Post,
            url: self.config.endpoint(LOGIN_PATH),
            bearer: None,
            body: Some(body),
        };
        self.execute(request, "Login failed").await
    }

    /// `GET /api/auth/me` authenticated with `access_token`
    pub async fn fetch_current_user(&self, access_token: &str) -> Result<User, AuthError> {
        let request = ApiRequest {
            method: Method::Get,
            url: self.config.endpoint(CURRENT_USER_PATH),
            bearer: Some(access_token.to_string()),
            body: None,
        };
        self.execute(request, "Failed to get current user").await
    }

    /// `POST /api/auth/refresh` exchanging `refresh_token` for a new pair
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let body = json!({ "refresh_token": refresh_token }).to_string();
        let request = ApiRequest {
            method: Method::Post,
            url: self.config.endpoint(REFRESH_PATH),
            bearer: None,
            body: Some(body),
        };
        self.execute(request, "Token refresh failed").await
    }

    /// Send `request` and decode a 2xx body; `fallback` names the failure
    /// when the error body has no `detail`.
    pub(crate) async fn execute<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R, AuthError> {
        debug!(method = ?request.method, url = %request.url, "api request");
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = rejection_message(&response.body, fallback);
            debug!(status = response.status, %message, "api request rejected");
            return Err(AuthError::Rejected { status: response.status, message });
        }

        serde_json::from_str(&response.body).map_err(|e| AuthError::Decode(e.to_string()))
    }
}

/// Resolve `request`, or fail with [`AuthError::Timeout`] if `deadline`
/// completes first.
pub async fn with_deadline<T>(
    request: impl Future<Output = Result<T, AuthError>>,
    deadline: impl Future<Output = ()>,
) -> Result<T, AuthError> {
    match select(Box::pin(request), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthError::Timeout),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{client, ScriptedTransport};
    use super::*;
    use crate::models::Role;

    const LOGIN_OK: &str = r#"{
        "access_token": "a",
        "refresh_token": "r",
        "token_type": "bearer",
        "expires_in": 1800,
        "user_info": {"id": "1", "username": "superadmin", "full_name": "Super Administrator",
                      "role": "SuperAdmin", "permissions": ["*"]}
    }"#;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let transport = ScriptedTransport::default().respond(200, LOGIN_OK);
        let api = client(transport.clone());

        let response = api
            .login(&Credentials::new("superadmin", "admin123"))
            .await
            .expect("login should succeed");
        assert_eq!(response.access_token, "a");
        assert_eq!(response.user_info.role, Role::SuperAdmin);

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://api.test/api/auth/login");
        assert_eq!(sent[0].bearer, None);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "superadmin", "password": "admin123"}));
    }

    #[tokio::test]
    async fn test_rejection_uses_detail() {
        let transport = ScriptedTransport::default().respond(401, r#"{"detail":"Invalid credentials"}"#);
        let err = client(transport)
            .login(&Credentials::new("superadmin", "wrong"))
            .await
            .unwrap_err();

        match err {
            AuthError::Rejected { status, ref message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_detail_uses_fallback() {
        let transport = ScriptedTransport::default()
            .respond(500, "<html>Internal Server Error</html>")
            .respond(401, r#"{"error":"nope"}"#);
        let api = client(transport);

        let err = api.fetch_current_user("a").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to get current user");

        let err = api.refresh("r").await.unwrap_err();
        assert_eq!(err.to_string(), "Token refresh failed");
    }

    #[tokio::test]
    async fn test_current_user_sends_bearer() {
        let transport = ScriptedTransport::default().respond(
            200,
            r#"{"id":"2","username":"manager","full_name":"Casino Manager","role":"GeneralAdmin","permissions":["reports:read"]}"#,
        );
        let user = client(transport.clone()).fetch_current_user("tok").await.unwrap();
        assert_eq!(user.username, "manager");

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_refresh_body_and_partial_pair() {
        let transport = ScriptedTransport::default().respond(200, r#"{"access_token":"a2"}"#);
        let pair = client(transport.clone()).refresh("r1").await.unwrap();
        assert_eq!(pair.access_token, "a2");
        assert_eq!(pair.refresh_token, None);

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].url, "http://api.test/api/auth/refresh");
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"refresh_token": "r1"}));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let transport = ScriptedTransport::default().respond(200, "not json");
        let err = client(transport).refresh("r").await.unwrap_err();
        assert!(matches!(err, AuthError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let transport = ScriptedTransport::default().fail(AuthError::Network("offline".to_string()));
        let err = client(transport).login(&Credentials::new("a", "b")).await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }

    #[tokio::test]
    async fn test_deadline_passes_ready_result_through() {
        let result = with_deadline(async { Ok::<_, AuthError>(7) }, std::future::pending::<()>()).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_deadline_times_out_stalled_request() {
        let stalled = std::future::pending::<Result<User, AuthError>>();
        let err = with_deadline(stalled, async {}).await.unwrap_err();
        assert!(matches!(err, AuthError::Timeout));
        assert_eq!(err.user_message(), "The server took too long to respond. Please try again.");
    }

    #[tokio::test]
    async fn test_deadline_keeps_request_errors() {
        let transport = ScriptedTransport::default().respond(401, r#"{"detail":"Token expired"}"#);
        let api = client(transport);
        let err = with_deadline(api.fetch_current_user("a"), std::future::pending::<()>())
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
    }
}
