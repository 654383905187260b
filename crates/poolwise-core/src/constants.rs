/// Poolwise version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file looked up in the project root.
pub const CONFIG_FILENAME: &str = "poolwise.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "POOLWISE_LOG";

/// Prefix for environment variable config overrides.
pub const ENV_PREFIX: &str = "POOLWISE_";
