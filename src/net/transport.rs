//! HTTP transport seam between the REST clients and the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Elsewhere: [`BrowserTransport`] fails with a network error, since these
//! endpoints are only reachable from the browser. Tests plug in their own
//! [`HttpTransport`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use futures::future::{Either, select};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request relative to the configured API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None, bearer: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None, bearer: None }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn post<B: serde::Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Post, path: path.into(), body: Some(to_json(body)?), bearer: None })
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn put<B: serde::Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Put, path: path.into(), body: Some(to_json(body)?), bearer: None })
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

fn to_json<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Pass 2xx responses through; everything else becomes a rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for non-2xx statuses.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::rejected(self.status, &self.body))
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is not the expected JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends [`ApiRequest`]s and reports any completed exchange, whatever its status.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Fetch-backed transport used by the pages.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: ClientConfig,
}

impl BrowserTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(&request.path);
            log::debug!("{:?} {url}", request.method);
            let after_ms = self.config.request_timeout_ms;
            let timer = gloo_timers::future::TimeoutFuture::new(after_ms);
            race_timeout(fetch(&url, request), timer, after_ms).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// Resolve with `work`, or with [`ApiError::Timeout`] if `timer` fires first.
///
/// The losing future is dropped.
///
/// # Errors
///
/// Returns the error of `work`, or [`ApiError::Timeout`] carrying `after_ms`.
pub async fn race_timeout<W, T>(work: W, timer: T, after_ms: u32) -> Result<ApiResponse, ApiError>
where
    W: Future<Output = Result<ApiResponse, ApiError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(work), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("request timed out after {after_ms} ms");
            Err(ApiError::Timeout { after_ms })
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch(url: &str, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    if let Some(token) = &request.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let prepared = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(ApiResponse { status, body })
}
