//! Identity service client
//!
//! The gateway never inspects tokens itself: every protected route hands the
//! bearer token to the identity service's whoami endpoint and acts on the
//! answer. One outbound attempt per call, bounded by the client timeout; a
//! transient failure is surfaced to the caller, not retried here.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Profile of a successfully validated user.
///
/// Only `id` is consumed downstream (as the owner identifier); everything
/// else the identity service returns rides along opaquely.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, Value>,
}

/// Typed outcome of a failed token validation.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity service rejected the token (or it was empty).
    #[error("invalid token")]
    InvalidToken { detail: Option<String> },

    /// The identity service could not be reached at all.
    #[error("identity service unreachable: {0}")]
    ServiceUnavailable(String),

    /// The identity service answered with a non-401 failure status.
    #[error("identity service fault: status {status}")]
    Upstream { status: u16 },

    /// The identity service answered 200 with an undecodable profile.
    #[error("malformed identity profile: {0}")]
    MalformedProfile(String),
}

/// HTTP client for the identity service.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Validate a bearer token against the identity service's whoami
    /// endpoint.
    ///
    /// Empty tokens fail immediately without a remote call. A 401 carries the
    /// upstream `detail` field through when the body provides one.
    pub async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidToken { detail: None });
        }

        let response = self
            .http
            .get(format!("{}/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<AuthenticatedUser>()
                .await
                .map_err(|e| AuthError::MalformedProfile(e.to_string()));
        }

        if status == StatusCode::UNAUTHORIZED {
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("detail")?.as_str().map(str::to_string));
            return Err(AuthError::InvalidToken { detail });
        }

        Err(AuthError::Upstream {
            status: status.as_u16(),
        })
    }

    /// Forward a registration payload to the identity service verbatim.
    /// Returns the upstream status and JSON body unchanged.
    pub async fn register(&self, body: &Value) -> Result<(u16, Value), AuthError> {
        let response = self
            .http
            .post(format!("{}/register", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| AuthError::MalformedProfile(e.to_string()))?;

        Ok((status, body))
    }

    /// Forward a password-grant login form to the identity service's token
    /// endpoint. Returns the upstream status and JSON body unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<(u16, Value), AuthError> {
        let form = [
            ("username", username),
            ("password", password),
            ("grant_type", "password"),
        ];

        let response = self
            .http
            .post(format!("{}/token", self.base_url))
            .form(&form)
            .send()
            .await
            .map_err(|e| AuthError::ServiceUnavailable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| AuthError::MalformedProfile(e.to_string()))?;

        Ok((status, body))
    }
}
