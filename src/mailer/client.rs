//! HTTP client for the EmailJS REST API
//!
//! The browser SDK is a thin wrapper over a single JSON POST; this client
//! issues the same request with the account's public key as `user_id`.

use super::error::SendError;
use super::traits::{Mailer, SendReceipt};
use crate::config::EmailJsConfig;
use crate::state::FieldRecord;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Request timeout for a single send
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FieldRecord,
}

/// Client for the EmailJS send endpoint
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(config: &EmailJsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            public_key: config.public_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        record: &FieldRecord,
    ) -> Result<SendReceipt, SendError> {
        let payload = SendPayload {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: record,
        };
        tracing::debug!(service_id, template_id, fields = record.len(), "POST {}", self.endpoint);

        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(SendError::Rejected { status, body: text });
        }
        Ok(SendReceipt { status, text })
    }
}
