//! Trait abstraction for submission gateways to enable mocking in tests

use crate::error::GatewayError;
use crate::state::{Feed, GatewayReply};
use async_trait::async_trait;

/// Anything that can durably accept a validated form value
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Send a value and report whether it was accepted.
    ///
    /// An `Err` is treated exactly like an explicit `GatewayReply::Failure`.
    async fn submit(&self, value: &str) -> Result<GatewayReply, GatewayError>;
}

/// Source of the text shown on the server data view
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, feed: Feed) -> Result<String, GatewayError>;
}
