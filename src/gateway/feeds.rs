//! HTTP source for the proxy endpoints' text

use super::traits::FeedSource;
use crate::error::GatewayError;
use crate::state::Feed;
use async_trait::async_trait;
use tracing::debug;

/// Reads feeds with plain GETs against the backend
#[derive(Debug, Clone)]
pub struct HttpFeeds {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFeeds {
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, feed: Feed) -> String {
        format!("{}{}", self.base_url, feed.path())
    }
}

#[async_trait]
impl FeedSource for HttpFeeds {
    async fn fetch(&self, feed: Feed) -> Result<String, GatewayError> {
        let url = self.url(feed);
        debug!(%url, "GET feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
