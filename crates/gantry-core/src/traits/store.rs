//! Session persistence trait.

use crate::Result;
use crate::session::Session;

/// Persistent storage for the login session.
///
/// Modeled as an injected dependency with explicit lifecycle rules:
/// read once at startup, written on login, cleared on logout.
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, if any.
    fn load(&self) -> Result<Option<Session>>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the persisted session. Clearing an empty store is not an
    /// error.
    fn clear(&self) -> Result<()>;
}
