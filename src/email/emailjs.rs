//! EmailJS transport over its REST API

use super::provider::{EmailTransport, TransportError, TransportLoader};
use crate::config::EmailJsConfig;
use crate::domain::{TemplateParams, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

/// Loads the EmailJS SDK resource and binds a transport to the public key
pub struct EmailJsLoader {
    config: EmailJsConfig,
}

impl EmailJsLoader {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TransportLoader for EmailJsLoader {
    async fn load(&self) -> Result<Arc<dyn EmailTransport>, TransportError> {
        let http_client = Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| TransportError::InvalidConfiguration(e.to_string()))?;

        let response = http_client
            .get(&self.config.sdk_url)
            .send()
            .await
            .map_err(|e| TransportError::InitFailed(format!("Failed to load EmailJS: {}", e)))?;

        if !response.status().is_success() {
            return Err(TransportError::InitFailed(format!(
                "EmailJS failed to load: {}",
                response.status()
            )));
        }

        tracing::debug!(
            public_key = %self.config.masked_public_key(),
            "EmailJS resource loaded"
        );

        Ok(Arc::new(EmailJsTransport {
            http_client,
            api_url: self.config.api_url.clone(),
            public_key: self.config.public_key.clone(),
        }))
    }
}

/// Sends template emails through `POST /api/v1.0/email/send`
pub struct EmailJsTransport {
    http_client: Client,
    api_url: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[async_trait]
impl EmailTransport for EmailJsTransport {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<TransportResponse, TransportError> {
        let request = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::CallFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        Ok(TransportResponse { status, text })
    }

    fn transport_name(&self) -> &'static str {
        "emailjs"
    }
}
