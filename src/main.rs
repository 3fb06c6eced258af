use anyhow::Result;
use clap::Parser;
use credential_notifier::cli::{Cli, Commands};
use credential_notifier::config::Config;
use credential_notifier::email::{BackendMailer, EmailJsLoader, LazyTransport};
use credential_notifier::presentation::{ConsolePresenter, Presenter};
use credential_notifier::{telemetry, CredentialNotifier, DeliveryOutcome};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Exit status when a human still has to send the email
const EXIT_MANUAL_ACTION: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    telemetry::init(&config.telemetry);

    let presenter: Arc<dyn Presenter> = Arc::new(ConsolePresenter::stdout());

    match cli.command {
        Commands::Send(args) => {
            let record = args.into_record()?;
            let transport = Arc::new(LazyTransport::new(Arc::new(EmailJsLoader::new(
                config.emailjs.clone(),
            ))));
            let notifier =
                CredentialNotifier::new(transport, presenter, config.emailjs, config.school);

            let outcome = notifier.notify(&record).await;
            info!(?outcome, "Credential delivery finished");

            Ok(match outcome {
                DeliveryOutcome::Delivered => ExitCode::SUCCESS,
                DeliveryOutcome::RequiresManualAction => ExitCode::from(EXIT_MANUAL_ACTION),
            })
        }
        Commands::Compose(args) => {
            let record = args.into_record()?;
            let transport = Arc::new(LazyTransport::new(Arc::new(EmailJsLoader::new(
                config.emailjs.clone(),
            ))));
            let notifier =
                CredentialNotifier::new(transport, presenter, config.emailjs, config.school);

            notifier.compose_manually(&record);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Backend(args) => {
            let record = args.into_record()?;
            let mailer = BackendMailer::new(
                config.backend,
                config.school,
                config.emailjs.timeout,
                presenter,
            )?;

            if mailer.send(&record).await {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
