//! Command-line argument parsing

use crate::domain::CredentialRecord;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Send teacher portal credentials by email
#[derive(Parser)]
#[command(name = "credential-notifier")]
#[command(version)]
#[command(about = "Email newly created teacher credentials, with manual fallback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Try every automated variant, then fall back to manual composition
    Send(RecordArgs),
    /// Skip automation and show the manual-compose surface
    Compose(RecordArgs),
    /// Deliver through the backend `/api/send-email` endpoint
    Backend(RecordArgs),
}

#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Read the record from a JSON file (camelCase keys)
    #[arg(long, conflicts_with_all = ["username", "password", "access_id", "teacher_name", "teacher_email"])]
    pub from_json: Option<PathBuf>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub access_id: Option<String>,

    #[arg(long)]
    pub teacher_name: Option<String>,

    #[arg(long)]
    pub teacher_email: Option<String>,
}

impl RecordArgs {
    /// Resolve the credential record from a file or the individual flags
    pub fn into_record(self) -> Result<CredentialRecord> {
        if let Some(path) = self.from_json {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Invalid credential record in {}", path.display()));
        }

        match (
            self.username,
            self.password,
            self.access_id,
            self.teacher_name,
            self.teacher_email,
        ) {
            (
                Some(username),
                Some(password),
                Some(access_id),
                Some(teacher_name),
                Some(teacher_email),
            ) => Ok(CredentialRecord {
                username,
                password,
                access_id,
                teacher_name,
                teacher_email,
            }),
            _ => bail!(
                "either --from-json or all of --username, --password, --access-id, \
                 --teacher-name and --teacher-email are required"
            ),
        }
    }
}
