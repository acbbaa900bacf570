use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;

use alumni_toast::config::{self, Config};
use alumni_toast::login::{Alert, LoginController, LoginForm};
use alumni_toast::media::{MediaClient, MediaCredentials};
use alumni_toast::notification::{Notifier, Outcome, StyleRegistry, TerminalToaster};
use alumni_toast::smoke::{Check, SmokeClient, run_smoke};
use alumni_toast::storage::{self, JsonFileStore, KeyValueStore, TOKEN_KEY};

/// Smoke checks and a simulated login for the alumni network backend
#[derive(Parser, Debug)]
#[command(name = "alumni-smoke", version, about)]
struct Cli {
    /// API base URL (defaults to the config file, then http://localhost:5000/api/v1)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Bearer token (defaults to the stored `token` value)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored toasts
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every endpoint (default)
    All,
    /// Check GET /test
    Test,
    /// Check GET /alumni
    Alumni,
    /// Ping the media upload service with credentials from the environment
    Media,
    /// Run the login form flow against the local store
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Remember the email for the next visit
        #[arg(long)]
        remember: bool,
    },
}

/// Alerts go to stderr; the terminal has no modal dialogs
struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&mut self, message: &str) {
        eprintln!("⛔ {}", message);
    }
}

type TerminalNotifier = Notifier<TerminalToaster<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let config = loaded.config;

    let color = !cli.no_color && io::stdout().is_terminal();
    let registry = Arc::new(StyleRegistry::from_config(&config.toast));
    let mut notifier = Notifier::new(registry, TerminalToaster::new(io::stdout(), color));

    if let Some(warning) = loaded.warning {
        notifier.warning(&warning, None);
    }

    match cli.command.unwrap_or(Command::All) {
        Command::All => smoke(&cli.base_url, cli.token, &config, Check::ALL).await,
        Command::Test => smoke(&cli.base_url, cli.token, &config, &[Check::Test]).await,
        Command::Alumni => smoke(&cli.base_url, cli.token, &config, &[Check::Alumni]).await,
        Command::Media => media(&mut notifier).await,
        Command::Login {
            email,
            password,
            remember,
        } => {
            let form = LoginForm {
                email,
                password,
                remember_me: remember,
            };
            let store_path = storage::storage_path()
                .ok_or_else(|| eyre!("Could not determine home directory"))?;
            let store = JsonFileStore::open(store_path)?;
            login(form, store, &config, &mut notifier).await
        }
    }
}

async fn smoke(
    base_url: &Option<String>,
    token: Option<String>,
    config: &Config,
    checks: &[Check],
) -> Result<()> {
    let base_url = base_url.as_deref().unwrap_or(&config.server.base_url);
    let token = token.or_else(stored_token);

    let client = SmokeClient::new(base_url, token);
    let report = run_smoke(&client, checks).await;
    println!("{}", report.render());
    Ok(())
}

/// The `token` saved in local storage. The checks still run without it.
fn stored_token() -> Option<String> {
    let Some(path) = storage::storage_path() else {
        log::warn!("Could not determine home directory, sending no token");
        return None;
    };

    match JsonFileStore::open(path.clone()) {
        Ok(store) => store.get(TOKEN_KEY),
        Err(e) => {
            log::warn!("Ignoring {}: {}, sending no token", path.display(), e);
            None
        }
    }
}

async fn media(notifier: &mut TerminalNotifier) -> Result<()> {
    let credentials = match MediaCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            notifier.error(&e.to_string(), None);
            return Ok(());
        }
    };

    let client = MediaClient::new(credentials);
    let pending = notifier.loading("Pinging media service...", None);
    match client.ping().await {
        Ok(()) => notifier.resolve_loading(pending, Outcome::Success, "Media service is reachable"),
        Err(e) => notifier.resolve_loading(pending, Outcome::Error, &e.to_string()),
    };
    Ok(())
}

async fn login(
    form: LoginForm,
    store: JsonFileStore,
    config: &Config,
    notifier: &mut TerminalNotifier,
) -> Result<()> {
    let delay = Duration::from_millis(config.login.delay_ms);
    let mut controller = LoginController::new(store, StderrAlert, delay);

    if let Some(email) = controller.remembered_email() {
        notifier.info(&format!("Remembered account: {}", email), None);
    }

    let outcome = controller.submit(&form, notifier).await?;
    log::debug!("Login finished: {:?}", outcome);
    Ok(())
}
