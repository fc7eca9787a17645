mod config;
mod error;
mod sources;

use capabilities::{Capabilities, Preset};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use error::Result;
use sources::Sources;

const DEFAULT_LOG_FILTER: &str = "capctl=info,capabilities=info";

#[derive(Parser)]
#[command(name = "capctl")]
#[command(about = "Assemble capability sets for remote browser sessions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in presets
    Presets,
    /// Print the session request built from every source
    Show {
        #[command(flatten)]
        sources: Sources,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Read one capability as a flag (bool or "true"/"false" string)
    Flag {
        /// Capability name, e.g. acceptInsecureCerts
        name: String,
        /// Value used when the capability is unset or not a flag
        #[arg(long, default_value_t = false, action = ArgAction::Set)]
        default: bool,
        #[command(flatten)]
        sources: Sources,
    },
}

/// Payload handed to the session-creation protocol.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionRequest<'a> {
    desired_capabilities: &'a Capabilities,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => cmd_presets(),
        Commands::Show { sources, compact } => cmd_show(&sources, compact),
        Commands::Flag {
            name,
            default,
            sources,
        } => cmd_flag(&sources, &name, default),
    }
}

fn cmd_presets() -> Result<()> {
    println!("{:<18}  {:<18}  {:<8}  NOTE", "PRESET", "BROWSER", "PLATFORM");
    println!("{}", "-".repeat(64));

    for preset in Preset::ALL {
        let caps = preset.build();
        let platform = caps.platform().map(|p| p.to_string()).unwrap_or_default();
        let note = if preset.is_deprecated() {
            "deprecated".to_string()
        } else {
            preset
                .preferred_options()
                .map(|o| format!("prefer {o}"))
                .unwrap_or_default()
        };
        println!(
            "{:<18}  {:<18}  {:<8}  {note}",
            preset.name(),
            caps.browser_name().unwrap_or_default(),
            platform
        );
    }

    Ok(())
}

fn cmd_show(sources: &Sources, compact: bool) -> Result<()> {
    let caps = sources.assemble()?;
    let request = SessionRequest {
        desired_capabilities: &caps,
    };

    let json = if compact {
        serde_json::to_string(&request)?
    } else {
        serde_json::to_string_pretty(&request)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_flag(sources: &Sources, name: &str, default: bool) -> Result<()> {
    let caps = sources.assemble()?;
    println!("{}", caps.coerced_bool(name, default));
    Ok(())
}
