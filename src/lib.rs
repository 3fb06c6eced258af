//! Credential Notifier - teacher credential email delivery
//!
//! Sends newly created teacher portal credentials through an email transport,
//! trying several message shapes in turn, and falls back to a prefilled
//! manual-compose surface when automation is exhausted.

pub mod cli;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod presentation;
pub mod service;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use domain::{CredentialRecord, DeliveryOutcome};
pub use error::{NotifyError, Result};
pub use service::CredentialNotifier;
