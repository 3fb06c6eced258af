//! Common test utilities

use async_trait::async_trait;
use credential_notifier::config::Config;
use credential_notifier::domain::{
    CredentialRecord, ManualComposeSurface, TemplateParams, TransportResponse,
};
use credential_notifier::email::{EmailTransport, LazyTransport, TransportError, TransportLoader};
use credential_notifier::presentation::Presenter;
use credential_notifier::CredentialNotifier;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// The record used throughout the scenarios
pub fn jane() -> CredentialRecord {
    CredentialRecord::new("t1", "pw", "A100", "Jane Doe", "jane@example.com")
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

/// What a scripted transport does on one call
#[derive(Clone)]
#[allow(dead_code)]
pub enum Reply {
    Status(u16),
    Reject,
}

/// Transport that replays a script and records every call
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    pub calls: Mutex<Vec<TemplateParams>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new(script: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(Vec::new(), reply)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailTransport for ScriptedTransport {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        params: &TemplateParams,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(params.clone());
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            Reply::Status(status) => Ok(TransportResponse::new(status, "scripted")),
            Reply::Reject => Err(TransportError::CallFailed("rejected".to_string())),
        }
    }

    fn transport_name(&self) -> &'static str {
        "scripted"
    }
}

/// Loader that counts initialisations and takes a while to finish
pub struct CountingLoader {
    pub loads: AtomicUsize,
    transport: Arc<ScriptedTransport>,
}

#[allow(dead_code)]
impl CountingLoader {
    pub fn new(transport: Arc<ScriptedTransport>) -> Self {
        Self {
            loads: AtomicUsize::new(0),
            transport,
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransportLoader for CountingLoader {
    async fn load(&self) -> Result<Arc<dyn EmailTransport>, TransportError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(self.transport.clone())
    }
}

/// Presenter that keeps everything it was asked to show
#[derive(Default)]
pub struct RecordingPresenter {
    pub banners: Mutex<Vec<(String, String)>>,
    pub mailto_links: Mutex<Vec<String>>,
    pub surfaces: Mutex<Vec<ManualComposeSurface>>,
}

impl Presenter for RecordingPresenter {
    fn show_success(&self, teacher_name: &str, teacher_email: &str) {
        self.banners
            .lock()
            .unwrap()
            .push((teacher_name.to_string(), teacher_email.to_string()));
    }

    fn open_mail_client(&self, mailto: &str) {
        self.mailto_links.lock().unwrap().push(mailto.to_string());
    }

    fn show_manual_compose(&self, surface: &ManualComposeSurface) {
        self.surfaces.lock().unwrap().push(surface.clone());
    }
}

/// Notifier wired to an already loaded transport
#[allow(dead_code)]
pub fn notifier_with(
    transport: Arc<ScriptedTransport>,
    presenter: Arc<RecordingPresenter>,
) -> CredentialNotifier {
    let config = test_config();
    CredentialNotifier::new(
        Arc::new(LazyTransport::ready(transport)),
        presenter,
        config.emailjs,
        config.school,
    )
}
