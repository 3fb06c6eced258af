//! EmailJS transport tests (using WireMock)
//! These tests run the whole pipeline against a mocked EmailJS API.

mod common;

use common::{jane, test_config, RecordingPresenter};
use credential_notifier::email::{EmailJsLoader, LazyTransport};
use credential_notifier::{CredentialNotifier, DeliveryOutcome};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier_for(server: &MockServer, presenter: Arc<RecordingPresenter>) -> CredentialNotifier {
    let mut config = test_config();
    config.emailjs.sdk_url = format!("{}/npm/@emailjs/browser@3/dist/email.min.js", server.uri());
    config.emailjs.api_url = format!("{}/api/v1.0/email/send", server.uri());
    config.emailjs.timeout = Duration::from_secs(5);

    let transport = Arc::new(LazyTransport::new(Arc::new(EmailJsLoader::new(
        config.emailjs.clone(),
    ))));
    CredentialNotifier::new(transport, presenter, config.emailjs, config.school)
}

async fn mount_sdk(server: &MockServer, status: u16, expected_loads: u64) {
    Mock::given(method("GET"))
        .and(path("/npm/@emailjs/browser@3/dist/email.min.js"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_loads)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_direct_variant_delivered() {
    let server = MockServer::start().await;
    mount_sdk(&server, 200, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_ucugyeb",
            "template_id": "teacher_credentials",
            "user_id": "oo2Wy3ekGpOxTMdqX",
            "template_params": {
                "to_name": "Jane Doe",
                "to_email": "jane@example.com",
                "teacher_name": "Jane Doe",
                "access_id": "A100",
                "username": "t1",
                "password": "pw"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let presenter = Arc::new(RecordingPresenter::default());
    let outcome = notifier_for(&server, presenter.clone()).notify(&jane()).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
    assert_eq!(presenter.banners.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_falls_through_to_full_template() {
    let server = MockServer::start().await;
    mount_sdk(&server, 200, 1).await;

    // Only the full template carries from_email
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "template_params": { "from_email": "jrpschool2008@gmail.com" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("The recipients address is empty"),
        )
        .expect(2)
        .with_priority(2)
        .mount(&server)
        .await;

    let presenter = Arc::new(RecordingPresenter::default());
    let outcome = notifier_for(&server, presenter.clone()).notify(&jane()).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
}

#[tokio::test]
async fn test_unreachable_sdk_falls_back_to_manual() {
    let server = MockServer::start().await;
    // Every variant retries the load
    mount_sdk(&server, 404, 3).await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let presenter = Arc::new(RecordingPresenter::default());
    let outcome = notifier_for(&server, presenter.clone()).notify(&jane()).await;

    assert_eq!(outcome, DeliveryOutcome::RequiresManualAction);
    assert_eq!(presenter.surfaces.lock().unwrap().len(), 1);
    assert_eq!(presenter.mailto_links.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_every_variant_rejected_falls_back_to_manual() {
    let server = MockServer::start().await;
    mount_sdk(&server, 200, 1).await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The service ID is invalid"))
        .expect(3)
        .mount(&server)
        .await;

    let presenter = Arc::new(RecordingPresenter::default());
    let outcome = notifier_for(&server, presenter.clone()).notify(&jane()).await;

    assert_eq!(outcome, DeliveryOutcome::RequiresManualAction);
    assert!(presenter.banners.lock().unwrap().is_empty());
}
