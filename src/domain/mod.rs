//! Domain models for the credential notifier

pub mod credential;
pub mod email;

pub use credential::*;
pub use email::*;
