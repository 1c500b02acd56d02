//! mgq: Magnet Query - CLI for inspecting, filtering and comparing magnet URIs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use magneturi::ParseMode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod config;
mod error;
mod output;

use config::{Config, OutputFormat};
use error::Result;

#[derive(Parser)]
#[command(name = "mgq")]
#[command(about = "Magnet Query - inspect, filter and compare magnet URIs")]
#[command(version)]
struct Cli {
    /// Log level: trace, debug, info, warn, error (overrides config)
    #[arg(short = 'l', long = "log-level", global = true)]
    log_level: Option<String>,

    /// Config file (default: $MGQ_CONFIG, then the user config directory)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Parsing policy flags shared by every command that reads a URI.
#[derive(Args)]
struct ModeArgs {
    /// Drop invalid parameters instead of failing
    #[arg(short = 'L', long = "lenient")]
    lenient: bool,

    /// Fail on the first invalid parameter (overrides config)
    #[arg(short = 'S', long = "strict", conflicts_with = "lenient")]
    strict: bool,
}

impl ModeArgs {
    fn mode(&self, config: &Config) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::from(self.lenient || config.lenient)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a magnet URI and print its canonical form
    #[command(visible_alias = "p")]
    Parse {
        /// Magnet URI (magnet:?...)
        uri: String,

        #[command(flatten)]
        mode: ModeArgs,

        /// Output format (overrides config)
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Keep only parameters with the given prefixes, grouped in that order
    #[command(visible_alias = "f")]
    Filter {
        /// Magnet URI (magnet:?...)
        uri: String,

        /// Prefixes to keep (e.g. xt dn tr, or xt,dn,tr)
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        prefixes: Vec<String>,

        /// Fail unless the URI has every requested prefix
        #[arg(short = 'r', long = "require")]
        require: bool,

        #[command(flatten)]
        mode: ModeArgs,

        /// Output format (overrides config)
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check that a magnet URI has every given prefix (exit 1 if not)
    Check {
        /// Magnet URI (magnet:?...)
        uri: String,

        /// Prefixes that must be present
        #[arg(num_args = 0.., value_delimiter = ',')]
        prefixes: Vec<String>,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Print the values of every parameter with a prefix
    Get {
        /// Magnet URI (magnet:?...)
        uri: String,

        /// Prefix to look up (e.g. tr)
        prefix: String,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Compare the parameters of two magnet URIs, ignoring order (exit 1 if different)
    Compare {
        left: String,
        right: String,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// List known parameter prefixes
    Prefixes,

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long = "save")]
        save: bool,
    },
}

fn init_logging(level: &str) -> Result<()> {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Run a command; `Ok(false)` means it completed with a negative answer.
fn run(cli: Cli) -> Result<bool> {
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level))?;

    match cli.command {
        Commands::Parse { uri, mode, format } => {
            commands::parse_uri(&uri, mode.mode(&config), format.unwrap_or(config.format))?;
        }
        Commands::Filter { uri, prefixes, require, mode, format } => {
            commands::filter(
                &uri,
                &prefixes,
                require,
                mode.mode(&config),
                format.unwrap_or(config.format),
            )?;
        }
        Commands::Check { uri, prefixes, mode } => {
            return commands::check(&uri, &prefixes, mode.mode(&config));
        }
        Commands::Get { uri, prefix, mode } => {
            commands::get(&uri, &prefix, mode.mode(&config))?;
        }
        Commands::Compare { left, right, mode } => {
            return commands::compare(&left, &right, mode.mode(&config));
        }
        Commands::Prefixes => commands::prefixes()?,
        Commands::Config { save } => {
            commands::config(&config, cli.config.as_deref(), save)?;
        }
    }
    Ok(true)
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
