//! Backend API gateway client.
//!
//! Translates the five UI intents into HTTP requests against the configured
//! base URL and normalizes outcomes for the caller:
//!
//! - 2xx: the JSON body is parsed and returned verbatim - the client never
//!   validates or reshapes backend output.
//! - non-2xx: the body's optional `detail` message is surfaced as
//!   [`ApiError::RequestFailed`], falling back to the operation's fixed
//!   message when absent or unparseable.
//! - transport failures (connection refused, malformed 2xx body) route to
//!   the same `RequestFailed` path with the transport's own message.
//!
//! No retries, no explicit timeouts, no cancellation. The stored session
//! never influences a request: where the wire contract wants credentials
//! (create-product), they travel in the body on every call.

pub mod types;

pub use types::{NewProduct, Product};

use thiserror::Error;

use fruitstand_core::{AdminCredentials, Email};

use crate::config::ClientConfig;
use crate::session::CurrentUser;

// Fixed fallback messages, used when an error response carries no parseable
// `detail` field.
const SIGNUP_FALLBACK: &str = "Signup failed";
const LOGIN_FALLBACK: &str = "Login failed";
const LIST_FALLBACK: &str = "Failed to load products";
const CREATE_FALLBACK: &str = "Failed";

/// Errors surfaced by gateway operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not produce a usable 2xx response. Carries the
    /// backend's message when one was parseable, otherwise the operation's
    /// fixed fallback or the transport error's own text.
    #[error("{0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

/// Thin client for the five backend operations.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the configured backend.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.backend_url.as_str().trim_end_matches('/').to_owned(),
        }
    }

    /// POST `/auth/user/signup`.
    ///
    /// Success routes the caller to the login view; nothing is persisted
    /// here. Returns the backend payload verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] per the module contract.
    pub async fn signup_user(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/auth/user/signup", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&types::SignupRequest {
                name,
                email,
                password,
            })
            .send()
            .await?;
        let response = check(response, SIGNUP_FALLBACK).await?;
        Ok(response.json().await?)
    }

    /// POST `/auth/user/login`.
    ///
    /// Returns the backend's user payload as-is; the caller persists it as
    /// the current identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] per the module contract.
    pub async fn login_user(&self, email: &Email, password: &str) -> Result<CurrentUser, ApiError> {
        let url = format!("{}/auth/user/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&types::LoginRequest { email, password })
            .send()
            .await?;
        let response = check(response, LOGIN_FALLBACK).await?;
        Ok(response.json().await?)
    }

    /// POST `/auth/admin/login`.
    ///
    /// The response payload is discarded - only success or failure matters,
    /// and no admin identity or token is retained client-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] per the module contract.
    pub async fn login_admin(&self, email: &Email, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/admin/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&types::LoginRequest { email, password })
            .send()
            .await?;
        check(response, LOGIN_FALLBACK).await?;
        Ok(())
    }

    /// GET `/products`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] per the module contract.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);
        let response = self.http.get(&url).send().await?;
        let response = check(response, LIST_FALLBACK).await?;
        Ok(response.json().await?)
    }

    /// POST `/admin/products`.
    ///
    /// Credentials travel in the body on every call; the client performs no
    /// local authorization check first (the stored admin flag gates only
    /// rendering). Returns the created-product payload verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] per the module contract.
    pub async fn create_product(
        &self,
        product: &NewProduct,
        credentials: &AdminCredentials,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/admin/products", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&types::CreateProductRequest {
                product,
                credentials,
            })
            .send()
            .await?;
        let response = check(response, CREATE_FALLBACK).await?;
        Ok(response.json().await?)
    }
}

/// Normalize a response per the common contract: 2xx passes through,
/// anything else becomes [`ApiError::RequestFailed`] with the body's
/// `detail` message or the given fallback.
async fn check(response: reqwest::Response, fallback: &str) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_owned());
    tracing::debug!(status = %status, message = %message, "backend request failed");
    Err(ApiError::RequestFailed(message))
}
