//! Persistent auth session.
//!
//! The browser build of this client kept the token in localStorage; here it
//! lives in a TOML file next to the config. The token is read from disk at
//! the moment a request is dispatched rather than cached, so `inkpost login`
//! or `inkpost logout` in another terminal takes effect immediately.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove session file '{path}': {source}")]
    RemoveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Wrapper for the auth token that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the server.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    token: Option<String>,
}

/// On-disk session store.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Session store at the default location,
    /// `config_dir()/inkpost/session.toml`.
    pub fn open_default() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(config_dir.join("inkpost").join("session.toml"))
    }

    /// Session store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, if any.
    ///
    /// Reads the file on every call. A missing file, an unparsable file, or
    /// an empty token all count as "not logged in"; absence is passed
    /// through to the request rather than treated as an error here.
    pub fn token(&self) -> Option<SecureString> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read session file");
                return None;
            }
        };

        let session: SessionFile = match toml::from_str(&content) {
            Ok(session) => session,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "malformed session file");
                return None;
            }
        };

        session
            .token
            .filter(|token| !token.trim().is_empty())
            .map(SecureString::new)
    }

    /// Persist a token, replacing any previous one.
    pub fn save_token(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let session = SessionFile {
            token: Some(token.to_string()),
        };
        let content = toml::to_string(&session).expect("session file serializes");
        fs::write(&self.path, content).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Forget the stored token. Removing a session that does not exist is
    /// not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::RemoveError {
                path: self.path.clone(),
                source: err,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.toml"));
        (dir, store)
    }

    #[test]
    fn token_is_none_when_file_missing() {
        let (_dir, store) = temp_store();
        assert!(store.token().is_none());
    }

    #[test]
    fn save_then_read_round_trips() {
        let (_dir, store) = temp_store();
        store.save_token("abc123").unwrap();
        let token = store.token().expect("token present");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn clear_forgets_token() {
        let (_dir, store) = temp_store();
        store.save_token("abc123").unwrap();
        store.clear().unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn clear_without_session_is_ok() {
        let (_dir, store) = temp_store();
        assert!(store.clear().is_ok());
    }

    #[test]
    fn empty_token_counts_as_logged_out() {
        let (_dir, store) = temp_store();
        store.save_token("   ").unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn malformed_file_counts_as_logged_out() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "not = [valid").unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-token".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-token"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-token"));

        assert_eq!(secret.expose(), "my-secret-token");
    }
}
