use crate::config::{Config, DEFAULT_LOG_FILTER};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Builds the filter from the configured directive, falling back to the
/// default level when the directive does not parse.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    parse_filter(config).0
}

fn parse_filter(config: &Config) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(error)),
    }
}

/// Installs the global fmt subscriber. A second call leaves the first
/// subscriber in place.
pub fn init(config: &Config) {
    let (filter, rejected) = parse_filter(config);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if !installed {
        return;
    }

    match rejected {
        Some(error) => tracing::warn!(
            filter = %config.log_filter,
            %error,
            "invalid log filter, using {DEFAULT_LOG_FILTER}"
        ),
        None => tracing::debug!(filter = %config.log_filter, "logging initialised"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_filter: &str) -> Config {
        Config {
            log_filter: log_filter.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = Config::default();
        init(&config);
        init(&config);
    }

    #[test]
    fn valid_directive_is_kept() {
        assert_eq!(env_filter(&config("warn")).to_string(), "warn");
    }

    #[test]
    fn invalid_directive_falls_back() {
        let config = config("shopfront=loud");
        assert!(parse_filter(&config).1.is_some());
        assert_eq!(env_filter(&config).to_string(), DEFAULT_LOG_FILTER);
    }
}
