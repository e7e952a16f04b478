use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use inkpost::config::{Config, ConfigStore, SessionStore};
use inkpost::ui::runtime;

#[derive(Parser)]
#[command(
    name = "inkpost",
    about = "Terminal client for the inkpost blogging service",
    version
)]
struct Cli {
    /// Override the configured server base URL.
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Use an alternate config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Store an auth token for subsequent sessions.
    Login {
        /// Token issued by the blogging service.
        #[arg(long, value_name = "TOKEN")]
        token: String,
    },
    /// Forget the stored auth token.
    Logout,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing().context("failed to set up logging")?;

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).context("failed to load configuration")?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
        config.validate().context("invalid --server value")?;
    }

    let session = SessionStore::open_default();

    match cli.command {
        Some(Command::Login { token }) => {
            session
                .save_token(&token)
                .context("failed to store the token")?;
            println!("Token saved to {}", session.path().display());
            Ok(())
        }
        Some(Command::Logout) => {
            session.clear().context("failed to clear the session")?;
            println!("Logged out");
            Ok(())
        }
        None => {
            let store = ConfigStore::new(config, config_path);
            runtime::run(store, session).context("UI loop failed")
        }
    }
}

/// Log to a file under the cache dir; the TUI owns the terminal.
fn init_tracing() -> anyhow::Result<()> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inkpost");
    fs::create_dir_all(&log_dir)?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("inkpost.log"))?;

    let filter = EnvFilter::try_from_env("INKPOST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
