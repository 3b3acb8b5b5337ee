//! Tracing setup for the itemctl CLI
//!
//! Usage:
//!   itemctl --debug serve              # Debug logging to console
//!   RUST_LOG=itemctl_server=debug ...  # Fine-grained log control
//!
//! Filter precedence: RUST_LOG, then --debug, then `log_level` from config.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (overrides the configured level unless RUST_LOG is set)
    pub debug: bool,
    /// Level used when RUST_LOG is unset and --debug is off
    pub default_level: String,
}

impl TracingConfig {
    fn fallback_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.default_level
        }
    }
}

/// Build the level filter: RUST_LOG when set, otherwise the fallback directive.
pub fn build_filter(config: &TracingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.fallback_directive()))
        .map_err(|err| anyhow!("invalid log level '{}': {}", config.fallback_directive(), err))
}

/// Initialize console tracing
///
/// Fails on an unparsable level. A subscriber that is already installed is
/// left in place.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_overrides_configured_level() {
        let config = TracingConfig {
            debug: true,
            default_level: "warn".into(),
        };
        assert_eq!(config.fallback_directive(), "debug");
    }

    #[test]
    fn configured_level_used_without_debug() {
        let config = TracingConfig {
            debug: false,
            default_level: "warn".into(),
        };
        assert_eq!(config.fallback_directive(), "warn");
    }

    #[test]
    fn unparsable_level_is_error() {
        std::env::remove_var("RUST_LOG");
        let config = TracingConfig {
            debug: false,
            default_level: "verbose[".into(),
        };
        let err = build_filter(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log level 'verbose['"));
    }
}
