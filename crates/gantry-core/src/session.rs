//! Session types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque session token issued at login.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new session token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// An authenticated session.
///
/// Created on successful login, persisted by a
/// [`SessionStore`](crate::SessionStore), destroyed on logout. There is
/// no refresh or expiry handling; an authentication failure is the
/// caller's cue to log in again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Name the user signed in with.
    pub display_name: String,

    /// Company email address.
    pub email_address: String,

    /// Bearer token attached to subsequent requests.
    pub token: SessionToken,
}

impl Session {
    /// Create a session.
    pub fn new(
        display_name: impl Into<String>,
        email_address: impl Into<String>,
        token: SessionToken,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email_address: email_address.into(),
            token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hides_value_in_debug() {
        let token = SessionToken::new("jane_doe_jane");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("jane"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn session_serde_round_trip() {
        let session = Session::new("Jane Doe", "jane@aiplabro.com", SessionToken::new("u1"));
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.token.as_str(), "u1");
    }
}
