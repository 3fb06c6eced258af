//! Configuration management for the credential notifier

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// EmailJS transport configuration
    pub emailjs: EmailJsConfig,
    /// Sender details used in message bodies and the manual surface
    pub school: SchoolProfile,
    /// Optional backend mailer configuration
    pub backend: BackendConfig,
    /// Logging configuration
    pub telemetry: TelemetryConfig,
}

#[derive(Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public key registered with the EmailJS account
    pub public_key: String,
    /// Resource loaded once to initialise the transport
    pub sdk_url: String,
    /// REST endpoint that accepts send requests
    pub api_url: String,
    /// Per-request HTTP timeout
    pub timeout: Duration,
}

impl EmailJsConfig {
    /// Public key shortened for log output
    pub fn masked_public_key(&self) -> String {
        if self.public_key.is_empty() {
            return "NOT SET".to_string();
        }
        let prefix: String = self.public_key.chars().take(10).collect();
        format!("{}...", prefix)
    }
}

impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.masked_public_key())
            .field("sdk_url", &self.sdk_url)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SchoolProfile {
    /// Display name used as `from_name`
    pub name: String,
    /// Mailbox used as sender / reply-to
    pub email: String,
    /// Administration phone shown in the long message body
    pub phone: String,
    /// Where teachers log in
    pub portal_url: String,
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the server exposing `/api/send-email`
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// "json" or "pretty"
    pub log_format: String,
}

pub const DEFAULT_SERVICE_ID: &str = "service_ucugyeb";
pub const DEFAULT_TEMPLATE_ID: &str = "teacher_credentials";
pub const DEFAULT_PUBLIC_KEY: &str = "oo2Wy3ekGpOxTMdqX";
pub const DEFAULT_SDK_URL: &str = "https://cdn.jsdelivr.net/npm/@emailjs/browser@3/dist/email.min.js";
pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

impl Default for SchoolProfile {
    fn default() -> Self {
        Self {
            name: "J.R. Preparatory School".to_string(),
            email: "jrpschool2008@gmail.com".to_string(),
            phone: "+91-8363655600".to_string(),
            portal_url: "http://localhost:5173".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let school_defaults = SchoolProfile::default();

        let sdk_url = get("EMAILJS_SDK_URL", DEFAULT_SDK_URL);
        Url::parse(&sdk_url).context("Invalid EMAILJS_SDK_URL")?;
        let api_url = get("EMAILJS_API_URL", DEFAULT_API_URL);
        Url::parse(&api_url).context("Invalid EMAILJS_API_URL")?;

        let timeout_secs: u64 = get("EMAIL_HTTP_TIMEOUT_SECS", "30")
            .parse()
            .context("Invalid EMAIL_HTTP_TIMEOUT_SECS")?;

        let portal_url = get("PORTAL_URL", &school_defaults.portal_url);
        Url::parse(&portal_url).context("Invalid PORTAL_URL")?;

        // The backend lives next to the portal unless told otherwise
        let backend_url = lookup("BACKEND_URL").unwrap_or_else(|| portal_url.clone());
        Url::parse(&backend_url).context("Invalid BACKEND_URL")?;

        Ok(Self {
            emailjs: EmailJsConfig {
                service_id: get("EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID),
                template_id: get("EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID),
                public_key: get("EMAILJS_PUBLIC_KEY", DEFAULT_PUBLIC_KEY),
                sdk_url,
                api_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            school: SchoolProfile {
                name: get("SCHOOL_NAME", &school_defaults.name),
                email: get("SCHOOL_EMAIL", &school_defaults.email),
                phone: get("SCHOOL_PHONE", &school_defaults.phone),
                portal_url: portal_url.trim_end_matches('/').to_string(),
            },
            backend: BackendConfig {
                base_url: backend_url.trim_end_matches('/').to_string(),
            },
            telemetry: TelemetryConfig {
                log_format: get("LOG_FORMAT", "pretty"),
            },
        })
    }
}
