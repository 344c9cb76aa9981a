use std::cmp::Ordering;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verple::config::{self, DEFAULT_LOG_FILTER, VerpleConfig};
use verple::version::document;
use verple::{Detector, Format, Version};

#[derive(Parser)]
#[command(name = "verple")]
#[command(version, about = "Normalize, compare and serialize version identifiers")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/verple/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the semantic document of a version
    Parse {
        input: String,
        /// Only try this format (pep440, semver, calver, canonical)
        #[arg(long)]
        format: Option<Format>,
    },
    /// Print the canonical string of a version
    Canonical {
        input: String,
        #[arg(long)]
        format: Option<Format>,
    },
    /// Print `<`, `=` or `>` for two versions
    Compare { left: String, right: String },
    /// Decode a semantic document (argument or stdin) into its canonical string
    Decode { input: Option<String> },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = VerpleConfig::load(&config_path)?;

    let output = run(cli.command, &config, std::io::stdin())?;
    println!("{}", output);
    Ok(())
}

/// Execute one command and return what it prints
fn run(command: Command, config: &VerpleConfig, mut stdin: impl Read) -> anyhow::Result<String> {
    let detector = Detector::from_config(&config.formats);

    let output = match command {
        Command::Parse { input, format } => {
            let version = detector.parse(&input, format.or(config.default_format))?;
            document::to_json_string(&version, config.output.pretty)
        }
        Command::Canonical { input, format } => {
            let version = detector.parse(&input, format.or(config.default_format))?;
            version.to_canonical_string()
        }
        Command::Compare { left, right } => {
            let left = detector.parse(&left, config.default_format)?;
            let right = detector.parse(&right, config.default_format)?;
            let symbol = match left.compare(&right)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            symbol.to_string()
        }
        Command::Decode { input } => {
            let json = match input {
                Some(json) => json,
                None => {
                    let mut buf = String::new();
                    stdin
                        .read_to_string(&mut buf)
                        .context("Failed to read document from stdin")?;
                    buf
                }
            };
            let version: Version = document::from_json_str(&json)?;
            version.to_canonical_string()
        }
    };

    Ok(output)
}

fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
