#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod relay;
mod schema;
mod types;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::relay::{ConfigurationRelay, Host, IpcHost, RelayOutcome, StdoutHost};
use crate::schema::watchface_schema;
use crate::types::ConfigurationPayload;

#[derive(Parser)]
#[command(name = "rings-config")]
#[command(version)]
#[command(about = "Configuration relay for the Rings watchface", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Use this config file instead of the one in the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the settings schema in the configuration page's format
    Schema {
        /// Print the submission the page produces with every default instead
        #[arg(long)]
        defaults: bool,
    },
    /// Open the configuration page
    Open {
        /// Print the URL instead of launching a browser
        #[arg(long)]
        print_only: bool,

        /// Name of the IPC server of the host application
        #[arg(long)]
        ipc_server: Option<String>,
    },
    /// Encode a JSON settings object the way the configuration page returns it
    Encode {
        /// Settings as JSON text
        json: String,
    },
    /// Forward a response returned by the configuration page to the watch app
    Relay {
        /// Percent-encoded JSON response
        response: String,

        /// Name of the IPC server of the host application
        #[arg(long)]
        ipc_server: Option<String>,
    },
}

impl Command {
    /// Whether the command reads the relay settings file
    fn uses_config(&self) -> bool {
        matches!(self, Command::Open { .. } | Command::Relay { .. })
    }
}

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if debug { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let path = path.unwrap_or_else(AppConfig::path);
    AppConfig::load_from(&path).context("Failed to load config")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = if cli.command.uses_config() {
        load_config(cli.config)?
    } else {
        AppConfig::default()
    };

    match cli.command {
        Command::Schema { defaults } => {
            let schema = watchface_schema();
            let output = if defaults {
                serde_json::to_string_pretty(&schema.defaults()?)
                    .context("Failed to serialize defaults")?
            } else {
                schema.to_json()?
            };
            println!("{output}");
            Ok(())
        }
        Command::Open {
            print_only,
            ipc_server,
        } => {
            let print_only = print_only || config.print_only;
            match ipc_server {
                Some(name) => open_page(IpcHost::connect(name)?),
                None => open_page(StdoutHost::new(std::io::stdout(), print_only)),
            }
        }
        Command::Encode { json } => {
            let payload = ConfigurationPayload::from_json(&json).context("Invalid settings JSON")?;
            println!("{}", payload.encode()?);
            Ok(())
        }
        Command::Relay {
            response,
            ipc_server,
        } => match ipc_server {
            Some(name) => relay_response(IpcHost::connect(name)?, &response),
            None => relay_response(
                StdoutHost::new(std::io::stdout(), config.print_only),
                &response,
            ),
        },
    }
}

fn open_page<H: Host>(host: H) -> Result<()> {
    let relay = ConfigurationRelay::new(host, watchface_schema());
    relay.on_ready();
    relay.on_configuration_requested();
    Ok(())
}

fn relay_response<H: Host>(host: H, response: &str) -> Result<()> {
    let relay = ConfigurationRelay::new(host, watchface_schema());
    relay.on_ready();

    let outcome = relay
        .on_configuration_returned(response)
        .context("Failed to relay configuration")?;

    match outcome {
        RelayOutcome::Forwarded => info!(host = relay.host().name(), "Settings forwarded"),
        RelayOutcome::Suppressed => info!("No color in the response, settings not forwarded"),
    }
    Ok(())
}
