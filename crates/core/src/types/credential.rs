//! Admin credential types.

use serde::Serialize;

use crate::types::email::Email;

/// Admin email/password pair.
///
/// Sent in the body of every create-product request - the backend verifies
/// these on each call and is the sole authorization authority. Nothing here
/// is ever persisted client-side.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct AdminCredentials {
    /// Admin account email.
    pub email: Email,
    /// Admin account password, sent as-is to the backend.
    pub password: String,
}

impl AdminCredentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(email: Email, password: impl Into<String>) -> Self {
        Self {
            email,
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
