//! HTTP submission gateway
//!
//! Posts the field value form-encoded to `{base}/forms/{kind}`. A 2xx
//! response carries the echoed value; anything else is a failure.

use super::traits::SubmissionGateway;
use crate::error::GatewayError;
use crate::state::{FieldConfig, FormKind, GatewayReply};
use async_trait::async_trait;
use tracing::debug;

/// Default gateway base URL, the local `showcase serve` backend
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5173";

/// Gateway backed by an HTTP form action
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
    field: String,
}

impl HttpGateway {
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        kind: FormKind,
        config: &FieldConfig,
    ) -> Self {
        let endpoint = format!("{}/forms/{}", base_url.trim_end_matches('/'), kind.slug());
        Self {
            client,
            endpoint,
            field: config.name.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(&self, value: &str) -> Result<GatewayReply, GatewayError> {
        debug!(endpoint = %self.endpoint, "POST form submission");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[(self.field.as_str(), value)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(GatewayReply::Success { echoed_value: body })
        } else {
            Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
