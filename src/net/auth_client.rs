//! Register and login calls against the remote auth endpoints.
//!
//! Both operations fail closed: validation, transport and server failures all
//! come back as an [`ApiError`], never a panic, and neither operation touches
//! the session store itself.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use super::error::ApiError;
use super::transport::{ApiRequest, HttpTransport};
use super::types::{AuthSuccess, Credentials, LoginBody, LoginResponse, RegisterBody};

pub const REGISTER_ENDPOINT: &str = "/register";
pub const LOGIN_ENDPOINT: &str = "/login";

/// # Errors
///
/// Returns [`ApiError::Decode`] if the body cannot be serialized.
pub fn build_register_request(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    let body = RegisterBody {
        username: &credentials.username,
        email: &credentials.email,
        password: &credentials.password,
    };
    ApiRequest::post(REGISTER_ENDPOINT, &body)
}

/// # Errors
///
/// Returns [`ApiError::Decode`] if the body cannot be serialized.
pub fn build_login_request(credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    let body = LoginBody { username: &credentials.username, password: &credentials.password };
    ApiRequest::post(LOGIN_ENDPOINT, &body)
}

pub struct AuthClient<T> {
    transport: T,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Create an account. Success establishes no session; the user signs in
    /// separately afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for empty fields, transport failures and non-2xx responses.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        credentials.require_for_register()?;
        let request = build_register_request(credentials)?;
        self.transport.send(request).await?.error_for_status()?;
        log::info!("registered account {}", credentials.username);
        Ok(())
    }

    /// Exchange username and password for a token.
    ///
    /// The identity falls back to the submitted username when the server does
    /// not echo one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for empty fields, transport failures, non-2xx
    /// responses and bodies without a usable token.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSuccess, ApiError> {
        credentials.require_for_login()?;
        let request = build_login_request(credentials)?;
        let response = self.transport.send(request).await?.error_for_status()?;
        let body: LoginResponse = response.json()?;
        let Some(token) = body.token() else {
            return Err(ApiError::Decode("login response carried no token".to_owned()));
        };
        let identity = body.identity().unwrap_or_else(|| credentials.username.clone());
        Ok(AuthSuccess { token: token.to_owned(), identity: Some(identity) })
    }
}
