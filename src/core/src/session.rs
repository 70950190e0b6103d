//! Persistent session configuration.
//!
//! Reads the API endpoint, access token and user from `~/.asg/config.json`,
//! the file a previous login left behind.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AsgError, Result};
use crate::requirements::LoginChecker;

/// Default request timeout for API calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Session written by a previous login.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Session {
    /// Cloud Controller base URL (e.g. `https://api.example.com`)
    #[serde(default)]
    pub api_endpoint: String,
    /// OAuth access token, usually with its `bearer ` prefix
    #[serde(default)]
    pub access_token: String,
    /// Name of the authenticated user
    #[serde(default)]
    pub username: String,
    /// Accept invalid TLS certificates from the API
    #[serde(default)]
    pub skip_ssl_validation: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            api_endpoint: String::new(),
            access_token: String::new(),
            username: String::new(),
            skip_ssl_validation: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Session {
    /// Name of the authenticated user, or `""` when unknown.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        let token = self.access_token.trim();
        if token.to_lowercase().starts_with("bearer ") {
            token.to_string()
        } else {
            format!("bearer {token}")
        }
    }
}

/// Answers who the authenticated user is.
pub trait CurrentUser: Send + Sync {
    fn current_user(&self) -> String;
}

impl CurrentUser for Session {
    fn current_user(&self) -> String {
        self.username.clone()
    }
}

impl LoginChecker for Session {
    fn is_logged_in(&self) -> bool {
        !self.api_endpoint.trim().is_empty() && !self.access_token.trim().is_empty()
    }
}

/// Session file on disk.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the default path (`~/.asg/config.json`).
    pub fn default_path() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            AsgError::ConfigError("Cannot determine home directory for session file".to_string())
        })?;
        Ok(Self {
            path: home.join(".asg").join("config.json"),
        })
    }

    /// Create a store at a custom path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session. A missing file is a logged-out session.
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No session file, using empty session");
            return Ok(Session::default());
        }
        let data = std::fs::read_to_string(&self.path).map_err(|e| {
            AsgError::ConfigError(format!(
                "Failed to read session file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        serde_json::from_str(&data).map_err(|e| {
            AsgError::ConfigError(format!(
                "Failed to parse session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logged_in() -> Session {
        Session {
            api_endpoint: "https://api.example.com".to_string(),
            access_token: "bearer abc".to_string(),
            username: "my-user".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_missing_file_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("config.json"));

        let session = store.load().unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.username(), "");
        assert_eq!(session.current_user(), "");
        assert_eq!(session.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_logged_in_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "api_endpoint": "https://api.example.com",
                "access_token": "bearer abc",
                "username": "my-user",
                "organization": "my-org"
            }"#,
        )
        .unwrap();

        let loaded = SessionStore::new(path).load().unwrap();
        assert_eq!(loaded, logged_in());
        assert!(loaded.is_logged_in());
        assert_eq!(loaded.current_user(), "my-user");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_endpoint":"https://api.example.com"}"#).unwrap();

        let session = SessionStore::new(path).load().unwrap();
        assert!(!session.is_logged_in());
        assert!(!session.skip_ssl_validation);
        assert_eq!(session.request_timeout_secs, 30);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SessionStore::new(path).load().unwrap_err();
        assert!(matches!(err, AsgError::ConfigError(_)));
    }

    #[test]
    fn test_token_without_endpoint_is_logged_out() {
        let session = Session {
            access_token: "bearer abc".to_string(),
            ..Default::default()
        };
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_authorization_adds_bearer_prefix() {
        let mut session = logged_in();
        assert_eq!(session.authorization(), "bearer abc");

        session.access_token = "abc".to_string();
        assert_eq!(session.authorization(), "bearer abc");

        session.access_token = "Bearer xyz".to_string();
        assert_eq!(session.authorization(), "Bearer xyz");
    }
}
