use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::{Engine, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};

const FLAG_FILE: &str = "authenticated";

/// Default directory for local client state.
pub const DEFAULT_STATE_DIR: &str = ".crosswords-analytics";

/// File-backed "authenticated" flag.
///
/// The flag holds a digest of the password it was granted for, so a new
/// configured password invalidates flags written for the old one.
#[derive(Debug, Clone)]
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(FLAG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored digest, or `None` when no flag has been written yet.
    pub fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn write(&self, digest: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, digest)
    }
}

/// SHA-256 of the password, base64 encoded.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    STANDARD.encode(digest.as_slice())
}
