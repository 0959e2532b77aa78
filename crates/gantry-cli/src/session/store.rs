//! File-backed session store.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use gantry_core::error::StorageError;
use gantry_core::traits::SessionStore;
use gantry_core::{Result, Session};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stores the session as JSON under the user data directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store rooted at the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "gantry").ok_or(StorageError::NoStorageDir)?;
        Ok(Self::at_dir(dirs.data_dir()))
    }

    /// Store rooted at an explicit directory.
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            path: dir.join("session.json"),
        }
    }

    /// The session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(StorageError::from)?;
        let session: Session = serde_json::from_str(&json).map_err(StorageError::from)?;

        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(StorageError::from)?;
        }

        let json = serde_json::to_string_pretty(session).map_err(StorageError::from)?;
        fs::write(&self.path, &json).map_err(StorageError::from)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)
                .map_err(StorageError::from)?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(StorageError::from)?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(StorageError::from)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::SessionToken;

    fn sample_session() -> Session {
        Session::new("Jane Doe", "jane@aiplabro.com", SessionToken::new("u1"))
    }

    #[test]
    fn load_from_empty_store_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at_dir(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn session_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileSessionStore::at_dir(dir.path());
        store.save(&sample_session()).unwrap();

        // A fresh store over the same directory simulates a new process
        let reloaded = FileSessionStore::at_dir(dir.path()).load().unwrap().unwrap();
        assert_eq!(reloaded, sample_session());
        assert_eq!(reloaded.token.as_str(), "u1");
    }

    #[test]
    fn clear_removes_the_session() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileSessionStore::at_dir(dir.path());
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();

        assert!(FileSessionStore::at_dir(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn clear_on_empty_store_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at_dir(dir.path());
        assert!(store.clear().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_has_restrictive_permissions() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileSessionStore::at_dir(dir.path());
        store.save(&sample_session()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
