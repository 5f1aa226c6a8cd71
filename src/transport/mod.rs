//! Authenticated HTTP transport
//!
//! Everything below the decode layer lives here: URL construction,
//! credential application, query/form encoding of request parameters,
//! timeouts, retry with backoff and client-side rate limiting. The
//! pagination driver never sees any of it; it only calls a fetch function
//! that bottoms out in [`ApiTransport::send`].

mod client;
mod rate_limit;

pub use client::{BackoffType, ClientConfig, SignedClient};
pub use rate_limit::{Limiter, RateLimit};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;

use crate::error::Result;
use crate::params::RequestParams;

/// Raw response handed to the decode layer
///
/// The transport does not interpret bodies. Non-retryable statuses are
/// returned as-is, so classifying `stat: FAIL` envelopes and non-JSON error
/// bodies is the decode layer's job; retryable statuses that outlive the
/// retry budget are raised as errors instead.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Bytes,
}

/// The signed-call boundary every API request goes through
///
/// Implemented by [`SignedClient`] for real traffic; tests substitute their
/// own implementation to script responses without a network.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Perform one authenticated request
    ///
    /// `params` are sent as the query string for GET/DELETE and as a
    /// form-encoded body for POST.
    async fn send(&self, method: Method, path: &str, params: &RequestParams)
        -> Result<RawResponse>;
}
