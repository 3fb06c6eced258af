//! Email delivery for teacher credentials
//!
//! - EmailJS REST transport, loaded once and shared
//! - Three parameter variants tried in order
//! - Optional backend endpoint

pub mod backend;
pub mod emailjs;
pub mod lazy;
pub mod provider;
pub mod templates;
pub mod variants;

pub use backend::BackendMailer;
pub use emailjs::{EmailJsLoader, EmailJsTransport};
pub use lazy::LazyTransport;
pub use provider::{EmailTransport, TransportError, TransportLoader};
