//! Delivery through the school's own backend (`POST /api/send-email`)
//!
//! Independent of the EmailJS pipeline; callers opt in explicitly.

use crate::config::{BackendConfig, SchoolProfile};
use crate::domain::CredentialRecord;
use crate::email::templates;
use crate::presentation::Presenter;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const BACKEND_TEMPLATE: &str = "teacher-credentials";

#[derive(Debug, Serialize)]
pub struct BackendEmailRequest {
    pub to: String,
    pub subject: String,
    pub template: String,
    pub data: BackendEmailData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendEmailData {
    pub teacher_name: String,
    pub access_id: String,
    pub username: String,
    pub password: String,
    pub portal_url: String,
}

impl BackendEmailRequest {
    pub fn from_record(record: &CredentialRecord, school: &SchoolProfile) -> Self {
        Self {
            to: record.teacher_email.clone(),
            subject: templates::full_subject(school),
            template: BACKEND_TEMPLATE.to_string(),
            data: BackendEmailData {
                teacher_name: record.teacher_name.clone(),
                access_id: record.access_id.clone(),
                username: record.username.clone(),
                password: record.password.clone(),
                portal_url: school.portal_url.clone(),
            },
        }
    }
}

/// Client for the backend email endpoint
pub struct BackendMailer {
    config: BackendConfig,
    school: SchoolProfile,
    http_client: Client,
    presenter: Arc<dyn Presenter>,
}

impl BackendMailer {
    pub fn new(
        config: BackendConfig,
        school: SchoolProfile,
        timeout: Duration,
        presenter: Arc<dyn Presenter>,
    ) -> anyhow::Result<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            config,
            school,
            http_client,
            presenter,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/send-email", self.config.base_url)
    }

    /// Ask the backend to send the credentials; `true` on any 2xx
    pub async fn send(&self, record: &CredentialRecord) -> bool {
        let request = BackendEmailRequest::from_record(record, &self.school);

        let response = match self
            .http_client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Backend email service error");
                return false;
            }
        };

        if response.status().is_success() {
            self.presenter
                .show_success(&record.teacher_name, &record.teacher_email);
            true
        } else {
            tracing::error!(
                status = response.status().as_u16(),
                "Backend email service failed: {}",
                response.status().canonical_reason().unwrap_or("unknown")
            );
            false
        }
    }
}
