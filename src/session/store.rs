//! # Session Store
//!
//! Typed accessor over the persistent session file. The file is a small INI
//! document with a single `[session]` section holding the access token, the
//! logged-in display name, and the "selected profile" marker the feed uses
//! to hand a name to the profile page.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::api::types::Author;

const SECTION: &str = "session";
const KEY_ACCESS_TOKEN: &str = "access_token";
const KEY_USER_NAME: &str = "user_name";
const KEY_SELECTED_PROFILE: &str = "selected_profile";

/// Errors from reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("could not read session file: {0}")]
    Load(#[from] ini::Error),
    #[error("could not write session file: {0}")]
    Io(#[from] std::io::Error),
}

/// The authenticated user's credentials for this invocation.
///
/// Created on successful login, read by every authenticated call, cleared
/// on logout. There is no expiry or refresh handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user_name: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_name: user_name.into(),
        }
    }

    /// Whether the session user owns a post with the given author block.
    ///
    /// The service uses the registered name as the account handle, so this
    /// compares names; posts with no author block are never owned.
    pub fn owns(&self, author: Option<&Author>) -> bool {
        author.map(|a| a.name == self.user_name).unwrap_or(false)
    }
}

/// Read/write/clear access to the persisted session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over the given path. `~` is expanded.
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path).into_owned();
        Self {
            path: PathBuf::from(expanded),
        }
    }

    /// The resolved session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_ini(&self) -> Result<Ini, SessionStoreError> {
        if !self.path.exists() {
            return Ok(Ini::new());
        }
        Ok(Ini::load_from_file(&self.path)?)
    }

    fn write_ini(&self, ini: &Ini) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        ini.write_to_file(&self.path)?;
        Ok(())
    }

    /// Load the stored session, if a complete one exists.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let ini = self.read_ini()?;
        let section = ini.section(Some(SECTION));

        let token = section.and_then(|s| s.get(KEY_ACCESS_TOKEN));
        let name = section.and_then(|s| s.get(KEY_USER_NAME));

        match (token, name) {
            (Some(token), Some(name)) if !token.is_empty() && !name.is_empty() => {
                Ok(Some(Session::new(token, name)))
            }
            _ => Ok(None),
        }
    }

    /// Persist a freshly logged-in session.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut ini = self.read_ini()?;
        ini.with_section(Some(SECTION))
            .set(KEY_ACCESS_TOKEN, session.access_token.as_str())
            .set(KEY_USER_NAME, session.user_name.as_str());
        self.write_ini(&ini)
    }

    /// Remove the stored token and name. The selected-profile marker is
    /// cleared too; it is meaningless without a session.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        let mut ini = self.read_ini()?;
        ini.delete_from(Some(SECTION), KEY_ACCESS_TOKEN);
        ini.delete_from(Some(SECTION), KEY_USER_NAME);
        ini.delete_from(Some(SECTION), KEY_SELECTED_PROFILE);
        self.write_ini(&ini)
    }

    /// Record the profile name the feed's author link points at.
    pub fn set_selected_profile(&self, name: &str) -> Result<(), SessionStoreError> {
        let mut ini = self.read_ini()?;
        ini.with_section(Some(SECTION))
            .set(KEY_SELECTED_PROFILE, name);
        self.write_ini(&ini)
    }

    /// Read back the selected-profile marker.
    pub fn selected_profile(&self) -> Result<Option<String>, SessionStoreError> {
        let ini = self.read_ini()?;
        Ok(ini
            .get_from(Some(SECTION), KEY_SELECTED_PROFILE)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").to_string_lossy().into_owned();
        (dir, SessionStore::new(&path))
    }

    #[test]
    fn load_should_return_none_when_file_missing() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_should_round_trip() {
        let (_dir, store) = temp_store();
        let session = Session::new("abc", "alice");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn clear_should_remove_token_name_and_marker() {
        let (_dir, store) = temp_store();
        store.save(&Session::new("abc", "alice")).unwrap();
        store.set_selected_profile("bob").unwrap();

        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.selected_profile().unwrap(), None);
    }

    #[test]
    fn selected_profile_should_survive_session_save() {
        let (_dir, store) = temp_store();
        store.set_selected_profile("bob").unwrap();
        store.save(&Session::new("abc", "alice")).unwrap();
        assert_eq!(store.selected_profile().unwrap(), Some("bob".to_string()));
    }

    #[test]
    fn load_should_reject_empty_token() {
        let (_dir, store) = temp_store();
        store.save(&Session::new("", "alice")).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn owns_should_compare_author_name() {
        let session = Session::new("abc", "alice");
        let alice = Author {
            name: "alice".to_string(),
            email: None,
            avatar: None,
        };
        let bob = Author {
            name: "bob".to_string(),
            email: None,
            avatar: None,
        };
        assert!(session.owns(Some(&alice)));
        assert!(!session.owns(Some(&bob)));
        assert!(!session.owns(None));
    }
}
