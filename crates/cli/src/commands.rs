//! Subcommands and their execution.

use crate::config::{validate_count, CliConfig};
use anyhow::{bail, Context};
use clap::Subcommand;
use compact_uuid::CompactUuid;
use serde::Serialize;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate random (version 4) UUIDs
    Random {
        /// Number of UUIDs to print (defaults to COMPACT_UUID_DEFAULT_COUNT or 1)
        #[arg(long, short)]
        count: Option<usize>,
    },
    /// Generate the name-based (version 3) UUID of some text
    Name {
        /// Text whose UTF-8 bytes are hashed
        text: String,
    },
    /// Parse a UUID and show its 64-bit halves
    Parse {
        /// UUID in canonical form
        uuid: String,
    },
    /// Build a UUID from two 64-bit halves
    Halves {
        /// Most significant half, hexadecimal (optional 0x prefix)
        high: String,
        /// Least significant half, hexadecimal (optional 0x prefix)
        low: String,
    },
    /// Check whether a string is in strict canonical form
    Check {
        /// Candidate string
        input: String,
    },
}

#[derive(Debug, Serialize)]
struct UuidReport {
    uuid: CompactUuid,
    high: String,
    low: String,
    version: u8,
}

impl UuidReport {
    fn new(uuid: CompactUuid) -> Self {
        Self {
            uuid,
            high: format!("{:#018x}", uuid.high()),
            low: format!("{:#018x}", uuid.low()),
            version: uuid.version(),
        }
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("uuid: {}", self.uuid),
            format!("high: {}", self.high),
            format!("low: {}", self.low),
            format!("version: {}", self.version),
        ]
    }
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    input: &'a str,
    canonical: bool,
}

/// Runs `command` and returns the lines to print.
///
/// With `json` set, each line is a JSON document.
pub fn execute(command: &Commands, config: &CliConfig, json: bool) -> anyhow::Result<Vec<String>> {
    match command {
        Commands::Random { count } => {
            let count = count.unwrap_or(config.default_count());
            validate_count("--count", count)?;
            tracing::debug!("generating {} random UUIDs", count);

            let uuids: Vec<CompactUuid> = (0..count).map(|_| CompactUuid::random()).collect();
            if json {
                Ok(vec![serde_json::to_string(&uuids)?])
            } else {
                Ok(uuids.iter().map(ToString::to_string).collect())
            }
        }
        Commands::Name { text } => single(CompactUuid::name_based(text.as_bytes()), json),
        Commands::Parse { uuid } => {
            let parsed = CompactUuid::parse(uuid)
                .with_context(|| format!("failed to parse UUID '{}'", uuid))?;
            let report = UuidReport::new(parsed);
            if json {
                Ok(vec![serde_json::to_string(&report)?])
            } else {
                Ok(report.lines())
            }
        }
        Commands::Halves { high, low } => {
            let uuid = CompactUuid::from_halves(parse_half(high)?, parse_half(low)?);
            single(uuid, json)
        }
        Commands::Check { input } => {
            let canonical = CompactUuid::is_canonical(input);
            if !canonical {
                tracing::info!("'{}' is not in canonical form", input);
            }
            if json {
                Ok(vec![serde_json::to_string(&CheckReport {
                    input,
                    canonical,
                })?])
            } else if canonical {
                Ok(vec![format!("{}: canonical", input)])
            } else {
                Ok(vec![format!("{}: not canonical", input)])
            }
        }
    }
}

fn single(uuid: CompactUuid, json: bool) -> anyhow::Result<Vec<String>> {
    if json {
        Ok(vec![serde_json::to_string(&uuid)?])
    } else {
        Ok(vec![uuid.to_string()])
    }
}

/// Parses one 64-bit half given as up to 16 hex digits, with an optional `0x` prefix.
fn parse_half(raw: &str) -> anyhow::Result<u64> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if digits.is_empty() || digits.len() > 16 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("'{}' is not a 64-bit hexadecimal value", raw);
    }
    u64::from_str_radix(digits, 16)
        .with_context(|| format!("'{}' is not a 64-bit hexadecimal value", raw))
}
