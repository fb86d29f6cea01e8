// src/cli/mod.rs — CLI definition (clap derive)

pub mod chat;
pub mod export;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "folio", about = "Terminal portfolio with a digital twin chat", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Resume file (TOML or JSON) to render instead of the built-in profile
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Gemini model for the chat (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the portfolio in the terminal UI (default)
    Show,
    /// Chat with the digital twin on the command line
    Chat,
    /// Write the portfolio to stdout or a file
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Markdown)]
        format: ExportFormat,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the system instruction the chat runs with
    Prompt,
    /// Show config, profile and credential status
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.profile.is_none());
    }

    #[test]
    fn test_export_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["folio", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export { format, output }) => {
                assert_eq!(format, ExportFormat::Markdown);
                assert!(output.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "folio",
            "--profile",
            "me.toml",
            "-m",
            "gemini-2.0-flash",
            "chat",
        ])
        .unwrap();
        assert_eq!(cli.profile.as_deref(), Some("me.toml"));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(matches!(cli.command, Some(Commands::Chat)));
    }

    #[test]
    fn test_export_json_with_output() {
        let cli =
            Cli::try_parse_from(["folio", "export", "-f", "json", "-o", "out.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Export {
                format: ExportFormat::Json,
                output: Some(_)
            })
        ));
    }
}
