// src/main.rs — folio entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use folio::chat::{persona, SessionManager};
use folio::cli::{Cli, Commands};
use folio::infra::config::Config;
use folio::infra::{logger, paths};
use folio::profile::Profile;
use folio::provider;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file instead of stderr.
    let interactive = matches!(cli.command, None | Some(Commands::Show));
    if interactive {
        if let Err(e) = logger::init_file_logging("info", &paths::log_file_path()) {
            eprintln!("warning: file logging disabled: {e}");
        }
    } else {
        logger::init_logging("warn");
    }

    // Load config (falls back to defaults if no config.toml)
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(paths::config_file_path);
    let mut config = if cli.config.is_some() {
        Config::load_from(&config_path)?
    } else {
        Config::load()?
    };
    if let Some(ref path) = cli.profile {
        config.profile_path = Some(PathBuf::from(path));
    }
    if let Some(ref model) = cli.model {
        config.provider.model = model.clone();
    }

    let profile = Profile::load_or_default(config.profile_path.as_deref())?;
    tracing::debug!(profile = %profile.name, "profile loaded");

    // Commands that don't talk to the model
    match &cli.command {
        Some(Commands::Export { format, output }) => {
            return folio::cli::export::run_export(&profile, *format, output.as_deref());
        }
        Some(Commands::Prompt) => {
            println!("{}", persona::build_system_instruction(&profile)?);
            return Ok(());
        }
        Some(Commands::Status) => {
            return folio::cli::status::show_status(&config, &config_path, &profile);
        }
        _ => {}
    }

    let provider = provider::from_config(&config.provider)?;
    let manager = SessionManager::from_config(provider, &profile, &config)?;

    match cli.command {
        Some(Commands::Chat) => {
            folio::cli::chat::run_chat(&manager, profile.first_name(), profile.greeting()).await
        }
        _ => folio::tui::run_portfolio(Arc::new(profile), Arc::new(manager)),
    }
}
