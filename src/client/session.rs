//! Explicit API session.

/// Base URL and bearer token for one authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    token: String,
}

impl Session {
    /// Creates a session; a trailing `/` on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// Returns the API base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
