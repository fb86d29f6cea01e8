// src/cli/status.rs — Config, profile and credential status

use std::path::Path;

use crate::infra::config::{Config, API_KEY_ENV_VARS};
use crate::infra::paths;
use crate::profile::Profile;

/// Where the API key would be picked up from, if anywhere.
fn api_key_source(config: &Config) -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok_and(|v| !v.trim().is_empty()))
        .map(|var| format!("${var}"))
        .or_else(|| {
            config
                .provider
                .api_key
                .as_ref()
                .filter(|k| !k.trim().is_empty())
                .map(|_| "config.toml".to_string())
        })
}

fn config_line(config_path: &Path) -> String {
    if config_path.exists() {
        format!("  Config:     {} (loaded)", config_path.display())
    } else {
        "  Config:     (using defaults)".to_string()
    }
}

/// Display status. `config_path` is the file the config was loaded from.
pub fn show_status(config: &Config, config_path: &Path, profile: &Profile) -> anyhow::Result<()> {
    println!("folio v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", config_line(config_path));

    match &config.profile_path {
        Some(path) => println!("  Profile:    {} ({})", profile.name, path.display()),
        None => println!("  Profile:    {} (built-in)", profile.name),
    }
    println!(
        "              {} jobs, {} projects, {} skill groups",
        profile.experience.len(),
        profile.projects.len(),
        profile.skills.len(),
    );

    println!(
        "  Model:      google/{} (temperature {:.2})",
        config.provider.model, config.provider.temperature
    );
    match api_key_source(config) {
        Some(source) => println!("  API key:    found ({source})"),
        None => println!(
            "  API key:    missing, chat will answer with the fallback text. Set {}.",
            API_KEY_ENV_VARS[0]
        ),
    }
    match config.provider.request_timeout_secs {
        Some(secs) => println!("  Timeout:    {secs}s"),
        None => println!("  Timeout:    (none)"),
    }
    println!("  Log file:   {}", paths::log_file_path().display());

    Ok(())
}
