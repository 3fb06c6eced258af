//! Credential notification pipeline
//!
//! Tries each [`Variant`] in order against the shared transport and stops at
//! the first 200. When every variant fails the manual-compose surface is
//! shown instead. `notify` never returns an error.

use crate::config::{EmailJsConfig, SchoolProfile};
use crate::domain::{CredentialRecord, DeliveryOutcome, ManualComposeSurface, Variant};
use crate::email::{templates, variants, LazyTransport};
use crate::error::{NotifyError, Result};
use crate::presentation::Presenter;
use std::sync::Arc;

/// Sends teacher credentials by email with manual fallback
pub struct CredentialNotifier {
    transport: Arc<LazyTransport>,
    presenter: Arc<dyn Presenter>,
    emailjs: EmailJsConfig,
    school: SchoolProfile,
}

impl CredentialNotifier {
    pub fn new(
        transport: Arc<LazyTransport>,
        presenter: Arc<dyn Presenter>,
        emailjs: EmailJsConfig,
        school: SchoolProfile,
    ) -> Self {
        Self {
            transport,
            presenter,
            emailjs,
            school,
        }
    }

    /// Deliver `record` automatically, or hand it over for manual sending
    pub async fn notify(&self, record: &CredentialRecord) -> DeliveryOutcome {
        tracing::info!(
            teacher_email = %record.teacher_email,
            service_id = %self.emailjs.service_id,
            template_id = %self.emailjs.template_id,
            public_key = %self.emailjs.masked_public_key(),
            "Starting credential email delivery"
        );

        for variant in Variant::ORDER {
            tracing::info!(%variant, "Trying email variant");

            match self.attempt(variant, record).await {
                Ok(()) => {
                    tracing::info!(%variant, "Credential email sent");
                    self.presenter
                        .show_success(&record.teacher_name, &record.teacher_email);
                    return DeliveryOutcome::Delivered;
                }
                Err(e) => self.log_failure(variant, &e),
            }
        }

        let exhausted = NotifyError::DeliveryExhausted {
            attempts: Variant::ORDER.len(),
        };
        tracing::warn!(
            error = %exhausted,
            "Falling back to manual composition"
        );
        self.fallback_to_manual(record);

        DeliveryOutcome::RequiresManualAction
    }

    /// Show the manual-compose surface without trying the transport
    pub fn compose_manually(&self, record: &CredentialRecord) {
        let surface = self.manual_surface(record);
        self.presenter.show_manual_compose(&surface);
    }

    /// The message a human would send by hand
    pub fn manual_surface(&self, record: &CredentialRecord) -> ManualComposeSurface {
        ManualComposeSurface::new(
            record.teacher_email.clone(),
            self.school.email.clone(),
            templates::full_subject(&self.school),
            templates::full_body(record, &self.school),
        )
    }

    async fn attempt(&self, variant: Variant, record: &CredentialRecord) -> Result<()> {
        let transport = self
            .transport
            .get()
            .await
            .map_err(|e| NotifyError::from_transport(variant, e))?;

        let params = variants::build_params(variant, record, &self.school);
        tracing::debug!(
            %variant,
            to_name = %params.to_name,
            to_email = %params.to_email,
            subject = %params.subject,
            message_length = params.message.len(),
            "Sending email"
        );

        let response = transport
            .send(&self.emailjs.service_id, &self.emailjs.template_id, &params)
            .await
            .map_err(|e| NotifyError::from_transport(variant, e))?;

        if response.is_success() {
            Ok(())
        } else {
            Err(NotifyError::TransportCallFailure {
                variant,
                status: response.status,
                text: response.text,
            })
        }
    }

    fn fallback_to_manual(&self, record: &CredentialRecord) {
        let surface = self.manual_surface(record);
        self.presenter.open_mail_client(&surface.mailto_link());
        self.presenter.show_manual_compose(&surface);
    }

    fn log_failure(&self, variant: Variant, err: &NotifyError) {
        let detail = match err {
            NotifyError::TransportCallFailure { status, text, .. } => {
                tracing::error!(%variant, status, text = %text, "Email variant failed");
                text.clone()
            }
            other => {
                tracing::error!(%variant, error = %other, "Email variant failed");
                other.to_string()
            }
        };

        if let Some(hint) = self.misconfiguration_hint(&detail) {
            tracing::error!(%variant, "{}", hint);
        }
    }

    fn misconfiguration_hint(&self, message: &str) -> Option<String> {
        let message = message.to_lowercase();
        if message.contains("template") {
            Some(format!(
                "Template error: make sure template ID \"{}\" exists in the EmailJS account",
                self.emailjs.template_id
            ))
        } else if message.contains("service") {
            Some(format!(
                "Service error: check that service ID \"{}\" is correct and active",
                self.emailjs.service_id
            ))
        } else if message.contains("public") {
            Some(format!(
                "Public key error: verify the EmailJS public key ({})",
                self.emailjs.masked_public_key()
            ))
        } else {
            None
        }
    }
}
