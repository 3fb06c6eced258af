//! Email delivery domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the parameter set sent in one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Every credential field mirrored as a raw template parameter
    Direct,
    /// Reduced field set with a short message
    Simple,
    /// Richest parameter set, matching the named server-side template
    FullTemplate,
}

impl Variant {
    /// Attempt order used by the notifier
    pub const ORDER: [Variant; 3] = [Variant::Direct, Variant::Simple, Variant::FullTemplate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Simple => "simple",
            Self::FullTemplate => "full_template",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of one `notify` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// The recipient was notified automatically
    Delivered,
    /// Automation exhausted; a human has to send the email
    RequiresManualAction,
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// Raw reply of the transport capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    pub status: u16,
    pub text: String,
}

impl TransportResponse {
    pub const OK: u16 = 200;

    pub fn new(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(Self::OK, "OK")
    }

    /// Only an exact 200 counts as delivered
    pub fn is_success(&self) -> bool {
        self.status == Self::OK
    }
}

/// Outbound template parameters of a single variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub to_name: String,
    pub to_email: String,
    pub from_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_url: Option<String>,
}

/// Everything a human needs to send the credentials by hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualComposeSurface {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl ManualComposeSurface {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Prefilled `mailto:` URI with percent-encoded subject and body
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Recipient encoded in a `mailto:` URI
    pub fn mailto_target(link: &str) -> Option<&str> {
        let rest = link.strip_prefix("mailto:")?;
        Some(rest.split('?').next().unwrap_or(rest))
    }
}
