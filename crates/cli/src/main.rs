mod commands;
mod config;
mod constants;

use clap::Parser;
use commands::{execute, Commands};
use config::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compact-uuid")]
#[command(about = "Generate, parse and inspect compact UUIDs")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Entry point for the compact-uuid CLI
///
/// # Environment Variables
/// - `COMPACT_UUID_LOG`: tracing filter directive (default: "compact_uuid=warn,compact_uuid_cli=info")
/// - `COMPACT_UUID_DEFAULT_COUNT`: how many UUIDs `random` prints without `--count` (default: 1)
///
/// Both may also be set in a `.env` file in the working directory.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;

    // Logs go to stderr so stdout only carries command output.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(config.log_filter())?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            for line in execute(&command, &config, cli.json)? {
                println!("{}", line);
            }
        }
        None => {
            println!("Use 'compact-uuid --help' for commands");
        }
    }

    Ok(())
}
