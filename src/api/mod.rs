//! Remote API Wrappers
//!
//! Frontend bindings to the admin API, organized by domain.

mod auth;
mod records;

use std::future::Future;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use casino_access::{
    with_deadline, ApiConfig, ApiRequest, ApiResponse, AuthClient, AuthError, HttpTransport, Method, SessionStore,
};

use crate::browser::BrowserStorage;

pub use auth::*;
pub use records::*;

/// Upper bound on any single API call
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn network_error(error: gloo_net::Error) -> AuthError {
    AuthError::Network(error.to_string())
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AuthError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(network_error)?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(ApiResponse { status, body })
    }
}

pub fn client() -> AuthClient<GlooTransport> {
    AuthClient::new(ApiConfig::from_build_env(), GlooTransport)
}

pub fn sessions() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}

/// Fail with [`AuthError::Timeout`] if `request` outlives [`REQUEST_TIMEOUT_MS`].
pub async fn with_timeout<T>(request: impl Future<Output = Result<T, AuthError>>) -> Result<T, AuthError> {
    with_deadline(request, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await
}
