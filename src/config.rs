//! Server configuration, loaded from environment variables at startup.

use crate::{
    http::{StaticTokenAuthenticator, UserId},
    task::domain::PageRequest,
};

/// Runtime configuration for the task server.
///
/// Every field has a default so the server starts without any environment
/// variables set, using the in-memory store and accepting no tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP address to bind (`TASKBOARD_BIND`, default `0.0.0.0:5000`).
    pub bind_address: String,

    /// Postgres connection URL (`TASKBOARD_DATABASE_URL`). `None` selects the
    /// in-memory store.
    pub database_url: Option<String>,

    /// `tracing` filter string (`TASKBOARD_LOG`, default `info`).
    pub log_level: String,

    /// Emit log records as newline-delimited JSON (`TASKBOARD_LOG_JSON`).
    pub log_json: bool,

    /// Accepted `(token, user)` pairs (`TASKBOARD_API_TOKENS`, formatted as
    /// `token=user,token=user`).
    pub api_tokens: Vec<(String, String)>,

    /// Largest page size a listing may return (`TASKBOARD_MAX_PAGE_LIMIT`).
    pub max_page_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Builds [`Config`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds [`Config`] from an arbitrary key lookup, falling back to
    /// defaults for absent or unparsable values.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_address: lookup("TASKBOARD_BIND").unwrap_or_else(|| "0.0.0.0:5000".to_owned()),
            database_url: lookup("TASKBOARD_DATABASE_URL").filter(|url| !url.trim().is_empty()),
            log_level: lookup("TASKBOARD_LOG").unwrap_or_else(|| "info".to_owned()),
            log_json: lookup("TASKBOARD_LOG_JSON")
                .is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true")),
            api_tokens: lookup("TASKBOARD_API_TOKENS")
                .map(|raw| parse_tokens(&raw))
                .unwrap_or_default(),
            max_page_limit: lookup("TASKBOARD_MAX_PAGE_LIMIT")
                .and_then(|value| value.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(PageRequest::DEFAULT_MAX_LIMIT),
        }
    }

    /// Builds the token authenticator described by [`Self::api_tokens`].
    #[must_use]
    pub fn authenticator(&self) -> StaticTokenAuthenticator {
        self.api_tokens
            .iter()
            .map(|(token, user)| (token.clone(), UserId::new(user.as_str())))
            .collect()
    }
}

/// Parses `token=user` pairs separated by commas. Entries without `=` or
/// with an empty side are skipped.
fn parse_tokens(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| entry.split_once('='))
        .map(|(token, user)| (token.trim(), user.trim()))
        .filter(|(token, user)| !token.is_empty() && !user.is_empty())
        .map(|(token, user)| (token.to_owned(), user.to_owned()))
        .collect()
}
