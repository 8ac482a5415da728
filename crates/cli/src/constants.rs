//! Constants used by the compact-uuid CLI.

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "COMPACT_UUID_LOG";

/// Filter used when no directive is configured.
pub const DEFAULT_LOG_FILTER: &str = "compact_uuid=warn,compact_uuid_cli=info";

/// Environment variable holding the number of identifiers `random` prints by default.
pub const DEFAULT_COUNT_ENV_VAR: &str = "COMPACT_UUID_DEFAULT_COUNT";

/// Number of identifiers `random` prints when neither `--count` nor the environment say otherwise.
pub const DEFAULT_COUNT: usize = 1;

/// Upper bound for a single `random` invocation.
pub const MAX_COUNT: usize = 1_000_000;
