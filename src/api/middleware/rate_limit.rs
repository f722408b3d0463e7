//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for the public redirect endpoint.
///
/// # Limits
///
/// - **Rate**: `per_second` requests per second (`RATE_LIMIT_PER_SECOND`)
/// - **Burst**: `burst` requests (`RATE_LIMIT_BURST`)
///
/// Requests exceeding the limit receive `429 Too Many Requests`. Keys are the
/// socket peer address, so the server must be started with connect info.
///
/// Returns `None` if either limit is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{*path}", get(redirect_handler))
///     .layer(rate_limit::layer(50, 200).unwrap());
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Option<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    // The builder takes the replenish interval, not a rate.
    let period_ns = 1_000_000_000u64.checked_div(per_second)?;

    let governor_conf = GovernorConfigBuilder::default()
        .per_nanosecond(period_ns)
        .burst_size(burst)
        .finish()?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(layer(0, 10).is_none());
        assert!(layer(10, 0).is_none());
        assert!(layer(50, 200).is_some());
        assert!(layer(2_000_000_000, 10).is_none());
    }
}
