//! Unified error handling for the credential notifier
//!
//! None of these errors reach callers of `CredentialNotifier::notify`; they
//! exist so failures can be logged with context and turned into the next
//! fallback step.

use crate::domain::Variant;
use crate::email::TransportError;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Notification pipeline error types
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Transport could not be initialised: {0}")]
    TransportInitFailure(String),

    #[error("Variant {variant} failed with status {status}: {text}")]
    TransportCallFailure {
        variant: Variant,
        status: u16,
        text: String,
    },

    #[error("All {attempts} automated delivery attempts failed")]
    DeliveryExhausted { attempts: usize },
}

impl NotifyError {
    /// Lift a provider-layer error into the pipeline taxonomy for `variant`
    pub fn from_transport(variant: Variant, err: TransportError) -> Self {
        match err {
            TransportError::InitFailed(msg) => NotifyError::TransportInitFailure(msg),
            other => NotifyError::TransportCallFailure {
                variant,
                status: 0,
                text: other.to_string(),
            },
        }
    }
}
