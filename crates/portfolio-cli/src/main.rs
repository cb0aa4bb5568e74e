//! Portfolio admin CLI
//!
//! Drives the same login and dashboard controllers as the desktop admin
//! page, against the configured backend.
//!
//! ## Usage
//!
//! ```bash
//! # Log in (password from -p or PORTFOLIO_ADMIN_PASSWORD)
//! portfolio-admin login -u admin
//!
//! # Is a session stored?
//! portfolio-admin status
//!
//! # List contact messages
//! portfolio-admin messages
//!
//! # Mark a message as contacted, or delete it
//! portfolio-admin mark-read <id>
//! portfolio-admin delete <id>
//!
//! # Forget the stored token
//! portfolio-admin logout
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::console::login_error_text;
use portfolio_core::{
    logging, AppConfig, Credentials, Dashboard, GuardDecision, HttpAdminApi, LoginController,
    Message, PortfolioError, RouteGuard, SessionStore, SharedApi, SharedSession, Storage,
};

const PASSWORD_ENV: &str = "PORTFOLIO_ADMIN_PASSWORD";

/// Portfolio admin console
#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio admin console - read and manage contact messages")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend base URL (default: $PORTFOLIO_API_URL or http://localhost:5000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Data directory holding the session store
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,
        /// Password (default: $PORTFOLIO_ADMIN_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show whether a session is stored (no network)
    Status,

    /// List contact messages
    Messages,

    /// Mark a message as contacted
    MarkRead {
        /// Message id
        id: String,
    },

    /// Delete a message
    Delete {
        /// Message id
        id: String,
    },

    /// Forget the stored session token
    Logout,
}

/// Fail unless a session token is stored, like the admin route guard.
fn require_session(session: &dyn SessionStore) -> Result<()> {
    let mut guard = RouteGuard::new();
    guard.check(session);
    match guard.decision() {
        GuardDecision::Render => Ok(()),
        _ => bail!("not logged in (run `portfolio-admin login -u <user>` first)"),
    }
}

fn print_message(message: &Message) {
    let marker = if message.read { "✓" } else { "●" };
    println!("{} {}", marker, message.subject);
    println!("  ID: {}", message.id);
    println!("  From: {} <{}>", message.name, message.email);
    println!("  Received: {}", message.display_time());
    for line in message.body.lines() {
        println!("  | {}", line);
    }
    println!();
}

/// Surface the banner text the dashboard recorded for a failed action.
fn dashboard_error(dashboard: &Dashboard, err: PortfolioError) -> anyhow::Error {
    let text = dashboard
        .banner()
        .map(|b| b.text)
        .unwrap_or_else(|| err.to_string());
    anyhow::anyhow!(text)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::verbosity_filter(cli.verbose));

    let config = AppConfig::from_env()?.with_overrides(cli.api_url.as_deref(), cli.data_dir)?;
    tracing::debug!(?config, "Loaded configuration");

    let storage = Storage::new(config.session_db_path()).with_context(|| {
        format!(
            "Failed to open session store in {}",
            config.data_dir.display()
        )
    })?;
    let session: SharedSession = Arc::new(storage);

    match cli.command {
        Commands::Status => {
            if session.is_authenticated() {
                println!("Session: authenticated");
            } else {
                println!("Session: not authenticated");
            }
            println!("API: {}", config.api_base_url);
            println!("Data directory: {}", config.data_dir.display());
        }

        Commands::Logout => {
            session.clear()?;
            println!("Logged out");
        }

        Commands::Login { username, password } => {
            let password = password
                .or_else(|| std::env::var(PASSWORD_ENV).ok())
                .unwrap_or_default();
            let credentials = Credentials::new(username, password);
            if !credentials.is_complete() {
                bail!("username and password are required");
            }

            let api: SharedApi = Arc::new(HttpAdminApi::from_config(&config)?);
            let controller = LoginController::new(api, session.clone());
            if let Err(e) = controller.submit(&credentials).await {
                bail!("{}", login_error_text(&e));
            }
            println!("Logged in as {}", credentials.username);
        }

        Commands::Messages => {
            require_session(session.as_ref())?;
            let api: SharedApi = Arc::new(HttpAdminApi::from_config(&config)?);
            let dashboard = Dashboard::new(api, session.clone());

            if let Err(e) = dashboard.fetch_messages().await {
                return Err(dashboard_error(&dashboard, e));
            }

            let snapshot = dashboard.snapshot();
            println!(
                "Messages: {} ({} unread)",
                snapshot.messages.len(),
                snapshot.unread_count()
            );
            println!();
            for message in &snapshot.messages {
                print_message(message);
            }
        }

        Commands::MarkRead { id } => {
            require_session(session.as_ref())?;
            let api: SharedApi = Arc::new(HttpAdminApi::from_config(&config)?);
            let dashboard = Dashboard::new(api, session.clone());

            if let Err(e) = dashboard.mark_read(&id).await {
                return Err(dashboard_error(&dashboard, e));
            }
            if let Some(banner) = dashboard.banner() {
                println!("{}", banner.text);
            }
        }

        Commands::Delete { id } => {
            require_session(session.as_ref())?;
            let api: SharedApi = Arc::new(HttpAdminApi::from_config(&config)?);
            let dashboard = Dashboard::new(api, session.clone());

            if let Err(e) = dashboard.remove(&id).await {
                return Err(dashboard_error(&dashboard, e));
            }
            if let Some(banner) = dashboard.banner() {
                println!("{}", banner.text);
            }
        }
    }

    Ok(())
}
