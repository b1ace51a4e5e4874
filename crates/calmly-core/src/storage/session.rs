//! Persisted login session (`session.json` in the data directory).

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::api::Session;
use crate::error::CoreError;

const SESSION_FILE: &str = "session.json";

/// File-backed store for the current [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store inside the default data directory.
    pub fn open() -> Result<Self, CoreError> {
        Ok(Self::at(&data_dir()?))
    }

    /// Store inside `dir`.
    pub fn at(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` when logged out.
    pub fn load(&self) -> Result<Option<Session>, CoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// The stored session, or [`CoreError::NotLoggedIn`].
    pub fn require(&self) -> Result<Session, CoreError> {
        self.load()?.ok_or(CoreError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    /// Remove the stored session. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), CoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Credential;
    use crate::model::User;

    fn sample() -> Session {
        Session::new(
            Credential::bearer("tok"),
            User {
                id: Some(7),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
        )
    }

    #[test]
    fn load_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path());
        assert!(store.load().unwrap().is_none());
        assert!(matches!(store.require(), Err(CoreError::NotLoggedIn)));
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path());
        std::fs::write(store.path(), "{").unwrap();
        assert!(matches!(store.load(), Err(CoreError::Json(_))));
    }
}
