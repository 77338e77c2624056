//! Submission gateways for form values, plus the feeds read from the
//! same backend

mod client;
mod feeds;
mod traits;

pub use client::{HttpGateway, DEFAULT_GATEWAY_URL};
pub use feeds::HttpFeeds;
pub use traits::{FeedSource, SubmissionGateway};

#[cfg(test)]
pub use traits::{MockFeedSource, MockSubmissionGateway};

use crate::error::GatewayError;
use crate::state::{Feed, GatewayReply};
use std::time::Duration;
use tracing::warn;

/// Call the gateway, bounded by `limit` when one is set.
///
/// Never fails: transport errors, error statuses and timeouts all come back
/// as `GatewayReply::Failure`.
pub async fn dispatch(
    gateway: &dyn SubmissionGateway,
    value: &str,
    limit: Option<Duration>,
) -> GatewayReply {
    let result = match limit {
        Some(limit) => tokio::time::timeout(limit, gateway.submit(value))
            .await
            .unwrap_or(Err(GatewayError::TimedOut(limit))),
        None => gateway.submit(value).await,
    };

    match result {
        Ok(reply) => reply,
        Err(err) => {
            warn!("Gateway error: {err}");
            GatewayReply::Failure {
                reason: err.to_string(),
            }
        }
    }
}

/// Read one feed, bounded by `limit` when one is set
pub async fn load_feed(
    source: &dyn FeedSource,
    feed: Feed,
    limit: Option<Duration>,
) -> Result<String, GatewayError> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, source.fetch(feed))
            .await
            .unwrap_or(Err(GatewayError::TimedOut(limit))),
        None => source.fetch(feed).await,
    }
}
