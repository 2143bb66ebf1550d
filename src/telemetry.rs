//! Tracing subscriber setup.

use crate::config::Config;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used,
/// falling back to `info` when it is not a valid filter expression. Later
/// calls leave the first installed subscriber in place.
pub fn init(config: &Config) {
    let (filter, rejected) = filter_for(&config.log_level);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.log_json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
    if installed.is_err() {
        return;
    }
    if let Some(error) = rejected {
        warn!(
            level = %config.log_level,
            error = %error,
            "TASKBOARD_LOG is not a valid tracing filter; falling back to 'info'"
        );
    }
}

/// Resolves the active filter and reports a configured level that failed to
/// parse.
fn filter_for(level: &str) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    match level.parse::<EnvFilter>() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err.to_string())),
    }
}
