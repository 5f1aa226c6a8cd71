//! Client-side rate limiting
//!
//! The Admin API throttles aggressively; the transport keeps a token bucket
//! (via the governor crate) so bulk retrievals stay under the server's
//! limits instead of burning retries on 429s.

use std::num::NonZeroU32;
use std::sync::Arc;

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};

/// Rate limit settings for the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in the bucket)
    pub burst: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            requests_per_second: 10,
            burst: 10,
        }
    }
}

impl RateLimit {
    /// Create a rate limit with the given sustained rate and burst
    pub fn new(requests_per_second: u32, burst: u32) -> Self {
        Self {
            requests_per_second,
            burst,
        }
    }
}

/// Token bucket limiter used by [`SignedClient`](super::SignedClient)
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Limiter {
    /// Create a limiter from the given settings; zero values clamp to 1
    pub fn new(limit: &RateLimit) -> Self {
        let one = NonZeroU32::MIN;
        let quota = Quota::per_second(NonZeroU32::new(limit.requests_per_second).unwrap_or(one))
            .allow_burst(NonZeroU32::new(limit.burst).unwrap_or(one));

        Self {
            inner: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until a request is allowed
    pub async fn wait(&self) {
        self.inner.until_ready().await;
    }

    /// Check whether a request is allowed right now, without waiting
    pub fn try_acquire(&self) -> bool {
        self.inner.check().is_ok()
    }
}

impl std::fmt::Debug for Limiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Limiter").finish()
    }
}
