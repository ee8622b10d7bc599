use std::io;

use thiserror::Error;
use tracing::{info, warn};

use crate::infrastructure::auth_store::{AuthStore, hash_password};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("dashboard is locked; run `crosswords-analytics login` first")]
    Locked,
    #[error("failed to access auth state at {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Password gate in front of the statistics commands.
///
/// Not a security boundary: anyone with access to the state directory or the
/// API can bypass it.
#[derive(Debug, Clone)]
pub struct AuthGate {
    expected: Option<String>,
    store: AuthStore,
}

impl AuthGate {
    /// `password` is the configured application password; `None` (or empty)
    /// leaves the gate open.
    pub fn new(password: Option<String>, store: AuthStore) -> Self {
        Self {
            expected: password
                .filter(|p| !p.is_empty())
                .map(|p| hash_password(&p)),
            store,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Whether statistics commands may run.
    pub fn is_open(&self) -> Result<bool, AuthError> {
        let Some(expected) = &self.expected else {
            return Ok(true);
        };
        let stored = self.store.read().map_err(|source| self.store_error(source))?;
        Ok(stored.as_deref() == Some(expected.as_str()))
    }

    pub fn require(&self) -> Result<(), AuthError> {
        if self.is_open()? {
            Ok(())
        } else {
            Err(AuthError::Locked)
        }
    }

    /// Check `password` and persist the flag on success.
    pub fn login(&self, password: &str) -> Result<(), AuthError> {
        let Some(expected) = &self.expected else {
            info!("no application password configured, nothing to unlock");
            return Ok(());
        };

        if hash_password(password) != *expected {
            warn!("login attempt with incorrect password");
            return Err(AuthError::IncorrectPassword);
        }

        self.store
            .write(expected)
            .map_err(|source| self.store_error(source))?;
        info!(path = %self.store.path().display(), "dashboard unlocked");
        Ok(())
    }

    fn store_error(&self, source: io::Error) -> AuthError {
        AuthError::Store {
            path: self.store.path().display().to_string(),
            source,
        }
    }
}
