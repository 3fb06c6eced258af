//! Email transport traits and error types

use crate::domain::{TemplateParams, TransportResponse};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Transport error types
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Transport initialisation failed: {0}")]
    InitFailed(String),

    #[error("Send failed: {0}")]
    CallFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// A ready-to-use email transport capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Dispatch `params` through the given service and template.
    ///
    /// A non-200 reply is returned as a response, not as an error.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<TransportResponse, TransportError>;

    /// Get the transport name
    fn transport_name(&self) -> &'static str;
}

/// Loads and initialises a transport capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn EmailTransport>, TransportError>;
}
