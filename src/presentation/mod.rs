//! Presentation port for delivery feedback
//!
//! The notifier only talks to [`Presenter`]; how a banner or the manual
//! surface is drawn is up to the implementation.

use crate::domain::ManualComposeSurface;
use std::io::Write;
use std::sync::Mutex;

/// Where delivery feedback is shown
#[cfg_attr(test, mockall::automock)]
pub trait Presenter: Send + Sync {
    /// Transient confirmation that the recipient was emailed
    fn show_success(&self, teacher_name: &str, teacher_email: &str);

    /// Hand a prefilled `mailto:` link to the user's mail client
    fn open_mail_client(&self, mailto: &str);

    /// Show recipient, sender, subject and body for copying
    fn show_manual_compose(&self, surface: &ManualComposeSurface);
}

/// Success banner text
pub fn render_success(teacher_name: &str, teacher_email: &str) -> String {
    format!(
        "Email Sent Successfully!\nCredentials sent to {} at {}\n",
        teacher_name, teacher_email
    )
}

/// Manual-compose surface as plain text
pub fn render_manual_compose(surface: &ManualComposeSurface) -> String {
    let rule = "-".repeat(60);
    format!(
        "Email Credentials to Teacher\n\
         {rule}\n\
         Automated email failed - Manual sending required\n\
         {rule}\n\
         To:      {to}\n\
         From:    {from}\n\
         Subject: {subject}\n\
         {rule}\n\
         {body}\n\
         {rule}\n\
         Manual Email Instructions:\n\
         1. Open your email client (Gmail, Outlook, etc.)\n\
         2. Use {from} as the sender\n\
         3. Copy the recipient email, subject, and body from above\n\
         4. Send the email to the teacher\n",
        rule = rule,
        to = surface.to,
        from = surface.from,
        subject = surface.subject,
        body = surface.body,
    )
}

/// Presenter that writes plain text to a stream
pub struct ConsolePresenter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsolePresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write presenter output");
        }
    }
}

impl<W: Write + Send> Presenter for ConsolePresenter<W> {
    fn show_success(&self, teacher_name: &str, teacher_email: &str) {
        self.write(&render_success(teacher_name, teacher_email));
    }

    fn open_mail_client(&self, mailto: &str) {
        self.write(&format!("Open in your mail client:\n{}\n\n", mailto));
    }

    fn show_manual_compose(&self, surface: &ManualComposeSurface) {
        self.write(&render_manual_compose(surface));
    }
}
