//! # Middleware Module
//!
//! Global rate limiting for the HTTP API, sized from
//! [`HttpConfig::rate_limit`](crate::config::HttpConfig).

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Process-wide limiter shared by every request.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build a limiter allowing `requests_per_second`, or `None` when it is 0.
pub fn create_rate_limiter(requests_per_second: u32) -> Option<GlobalRateLimiter> {
    NonZeroU32::new(requests_per_second)
        .map(|rps| Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Reject with 429 once the global quota is spent.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    if limiter.check().is_err() {
        tracing::warn!(
            event = "rate_limited",
            path = request.uri().path(),
            "Rate limit exceeded"
        );
        return Err((StatusCode::TOO_MANY_REQUESTS, "Too Many Requests"));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_limiter() {
        assert!(create_rate_limiter(0).is_none());
    }

    #[test]
    fn quota_is_enforced() {
        let limiter = create_rate_limiter(2).expect("limiter");
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
