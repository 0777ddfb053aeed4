//! Persisted session state.
//!
//! The terminal analog of a browser storefront's local storage: a session
//! directory holding at most two files, one for the serialized user identity
//! and one literal marker recording a successful admin login. State survives
//! across invocations (the reload analog) until explicitly cleared.
//!
//! Reads are fail-open by policy: missing or undecodable state reads as
//! "logged out", never as an error. Writes propagate real failures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable file names inside the session directory.
pub mod files {
    /// Serialized user identity (JSON).
    pub const USER: &str = "user.json";

    /// Admin marker file.
    pub const ADMIN: &str = "admin";

    /// Literal content of the admin marker file.
    pub const ADMIN_MARKER: &str = "true";
}

/// Errors that can occur when writing session state.
///
/// Read paths never surface errors - see the module docs.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem write or remove failed.
    #[error("session write failed: {0}")]
    Io(#[from] io::Error),

    /// Identity could not be serialized.
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Session-stored user identity.
///
/// The backend's login payload, persisted verbatim: `name` is the only field
/// the client ever reads (the shop greeting), everything else rides along in
/// `rest` untouched so the stored JSON round-trips exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name shown in the shop header.
    pub name: String,
    /// Remaining backend fields, carried as-is.
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Durable, reload-surviving storage for the current identity.
///
/// The user identity and the admin flag are two independent pieces of
/// persisted state: logging in as a user does not clear the admin flag and
/// vice versa. They are NOT mutually exclusive.
///
/// Construct exactly one store (from the configured session directory) and
/// pass it where needed - there is no ambient global session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Open a store over the given session directory.
    ///
    /// The directory is created lazily on first write; opening never touches
    /// the filesystem.
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The persisted user identity, if any.
    ///
    /// Missing or undecodable state reads as `None`: a corrupt session never
    /// takes the UI down, it silently degrades to guest.
    #[must_use]
    pub fn user(&self) -> Option<CurrentUser> {
        let path = self.dir.join(files::USER);
        let bytes = fs::read(&path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "discarding undecodable session identity"
                );
                None
            }
        }
    }

    /// Persist the user identity.
    ///
    /// Subsequent [`user`](Self::user) calls, including from a freshly
    /// opened store on the same directory, return this value.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity cannot be encoded or written.
    pub fn set_user(&self, user: &CurrentUser) -> Result<(), SessionError> {
        self.ensure_dir()?;
        let bytes = serde_json::to_vec(user)?;
        fs::write(self.dir.join(files::USER), bytes)?;
        Ok(())
    }

    /// Remove the user identity (logout). The admin flag is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear_user(&self) -> Result<(), SessionError> {
        remove_if_present(&self.dir.join(files::USER))
    }

    /// Whether an admin-login success was previously recorded.
    #[must_use]
    pub fn admin_flag(&self) -> bool {
        fs::read_to_string(self.dir.join(files::ADMIN))
            .is_ok_and(|contents| contents.trim() == files::ADMIN_MARKER)
    }

    /// Record an admin-login success.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker cannot be written.
    pub fn set_admin_flag(&self) -> Result<(), SessionError> {
        self.ensure_dir()?;
        fs::write(self.dir.join(files::ADMIN), files::ADMIN_MARKER)?;
        Ok(())
    }

    /// Remove the admin marker.
    ///
    /// No command calls this - the admin flag has no logout path in the
    /// command surface, a known gap kept as-is. Provided for out-of-band
    /// cleanup only.
    ///
    /// # Errors
    ///
    /// Returns an error if the marker exists but cannot be removed.
    pub fn clear_admin_flag(&self) -> Result<(), SessionError> {
        remove_if_present(&self.dir.join(files::ADMIN))
    }

    fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }
}

fn remove_if_present(path: &Path) -> Result<(), SessionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> CurrentUser {
        serde_json::from_value(serde_json::json!({"id": 1, "name": "A"})).unwrap()
    }

    #[test]
    fn test_user_roundtrip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        let user = sample_user();

        store.set_user(&user).unwrap();
        assert_eq!(store.user(), Some(user.clone()));

        // A freshly opened store over the same directory is the reload analog.
        let reopened = SessionStore::open(dir.path());
        assert_eq!(reopened.user(), Some(user));
    }

    #[test]
    fn test_identity_is_persisted_verbatim() {
        let payload = serde_json::json!({"id": 1, "name": "A"});
        let user: CurrentUser = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(user.name, "A");
        assert_eq!(serde_json::to_value(&user).unwrap(), payload);
    }

    #[test]
    fn test_missing_state_reads_as_guest() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("never-written"));
        assert_eq!(store.user(), None);
        assert!(!store.admin_flag());
    }

    #[test]
    fn test_corrupt_identity_degrades_to_guest() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        store.set_user(&sample_user()).unwrap();

        fs::write(dir.path().join(files::USER), b"{not json").unwrap();
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_clear_user_always_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());

        // Clearing an empty store is fine.
        store.clear_user().unwrap();
        assert_eq!(store.user(), None);

        store.set_user(&sample_user()).unwrap();
        store.clear_user().unwrap();
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_admin_flag_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());

        assert!(!store.admin_flag());
        store.set_admin_flag().unwrap();
        assert!(store.admin_flag());
        assert!(SessionStore::open(dir.path()).admin_flag());

        store.clear_admin_flag().unwrap();
        assert!(!store.admin_flag());
    }

    #[test]
    fn test_tampered_admin_marker_is_not_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(files::ADMIN), "yes please").unwrap();
        assert!(!store.admin_flag());
    }

    #[test]
    fn test_user_and_admin_flag_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path());

        store.set_user(&sample_user()).unwrap();
        store.set_admin_flag().unwrap();

        // Logging out does not clear the admin flag.
        store.clear_user().unwrap();
        assert_eq!(store.user(), None);
        assert!(store.admin_flag());

        // And recording an admin login never touches the user identity.
        store.set_user(&sample_user()).unwrap();
        store.clear_admin_flag().unwrap();
        assert_eq!(store.user(), Some(sample_user()));
    }
}
