//! The signed reqwest transport
//!
//! Owns the concerns the pagination core explicitly delegates: credentials,
//! wire encoding of parameters, timeout enforcement, retry with backoff and
//! rate limiting.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::rate_limit::{Limiter, RateLimit};
use super::{ApiTransport, RawResponse};
use crate::error::{Error, Result};
use crate::params::RequestParams;

/// Backoff strategy between retry attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffType {
    /// Same delay every attempt
    Constant,
    /// Delay grows linearly with the attempt number
    Linear,
    /// Delay doubles each attempt
    #[default]
    Exponential,
}

/// Configuration for the signed transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, e.g. `https://api-xxxxxxxx.perimeter.example.com`
    pub api_host: String,
    /// Integration key, sent as the basic-auth username
    pub integration_key: String,
    /// Secret key, sent as the basic-auth password
    pub secret_key: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retries for retryable failures
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Client-side rate limit; `None` disables throttling
    pub rate_limit: Option<RateLimit>,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with default timeout, retry and rate-limit settings
    pub fn new(
        api_host: impl Into<String>,
        integration_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_host: api_host.into(),
            integration_key: integration_key.into(),
            secret_key: secret_key.into(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimit::default()),
            user_agent: format!("perimeter-admin/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set max retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set backoff configuration
    #[must_use]
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.backoff_type = backoff_type;
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Set the client-side rate limit
    #[must_use]
    pub fn rate_limit(mut self, limit: RateLimit) -> Self {
        self.rate_limit = Some(limit);
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn no_rate_limit(mut self) -> Self {
        self.rate_limit = None;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Authenticated HTTP transport backed by reqwest
pub struct SignedClient {
    client: Client,
    config: ClientConfig,
    limiter: Option<Limiter>,
}

impl SignedClient {
    /// Build a transport from the given config
    ///
    /// Fails if `api_host` is not a valid absolute URL or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.api_host)?;
        if config.integration_key.is_empty() || config.secret_key.is_empty() {
            return Err(Error::config("integration_key and secret_key are required"));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        let limiter = config.rate_limit.as_ref().map(Limiter::new);

        Ok(Self {
            client,
            config,
            limiter,
        })
    }

    /// Calculate backoff delay for a given attempt
    pub(crate) fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }

    fn build_url(&self, path: &str) -> String {
        let host = self.config.api_host.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{host}/{path}")
    }
}

#[async_trait]
impl ApiTransport for SignedClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &RequestParams,
    ) -> Result<RawResponse> {
        let url = self.build_url(path);
        let mut attempt = 0;

        while attempt <= self.config.max_retries {
            if let Some(ref limiter) = self.limiter {
                limiter.wait().await;
            }

            let mut req = self
                .client
                .request(method.clone(), &url)
                .basic_auth(&self.config.integration_key, Some(&self.config.secret_key));

            if method == Method::POST || method == Method::PUT {
                req = req.form(params);
            } else if !params.is_empty() {
                req = req.query(params);
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = extract_retry_after(&response);
                        if attempt < self.config.max_retries {
                            warn!(
                                attempt = attempt + 1,
                                retry_after, "rate limited (429), backing off"
                            );
                            tokio::time::sleep(Duration::from_secs(retry_after)).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::RateLimited {
                            retry_after_seconds: retry_after,
                        });
                    }

                    if crate::error::is_retryable_status(status.as_u16()) {
                        if attempt < self.config.max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                status = status.as_u16(),
                                attempt = attempt + 1,
                                ?delay,
                                "retryable server error"
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            continue;
                        }
                        // Retries exhausted; server errors never reach the
                        // decode layer.
                        let body = response.bytes().await?;
                        return Err(Error::http_status(
                            status.as_u16(),
                            String::from_utf8_lossy(&body),
                        ));
                    }

                    let body = response.bytes().await?;
                    debug!(%method, %url, status = status.as_u16(), "request completed");
                    return Ok(RawResponse {
                        status: status.as_u16(),
                        body,
                    });
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < self.config.max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            attempt = attempt + 1,
                            ?delay,
                            error = %e,
                            "connection failure, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        // Every branch above either returns or stays within the retry
        // budget, so the loop cannot fall through with attempts left.
        Err(Error::MaxRetriesExceeded {
            max_retries: self.config.max_retries,
        })
    }
}

impl std::fmt::Debug for SignedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedClient")
            .field("api_host", &self.config.api_host)
            .field("integration_key", &self.config.integration_key)
            .field("has_limiter", &self.limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Extract retry-after header value, defaulting to 60s
fn extract_retry_after(response: &reqwest::Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
