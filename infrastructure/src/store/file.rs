//! File-backed session store

use agentroom_application::SessionStore;
use agentroom_domain::SessionId;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores the session id as a plain string in a single file.
///
/// Every I/O failure is logged and swallowed: an unreadable or corrupt
/// file reads as "no session", a failed write or delete is a no-op.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/agentroom/session_id`, if the platform has a data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("agentroom").join("session_id"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<SessionId> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Could not read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        // Editors often leave a trailing newline behind
        match SessionId::new(raw.trim()) {
            Ok(id) => Some(id),
            Err(_) => {
                debug!("Session file {} is empty", self.path.display());
                None
            }
        }
    }

    fn set(&self, session: &SessionId) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create session directory {}: {}",
                parent.display(),
                e
            );
            return;
        }

        if let Err(e) = std::fs::write(&self.path, session.as_str()) {
            warn!("Could not write session file {}: {}", self.path.display(), e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove session file {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session_id"));

        assert_eq!(store.get(), None);

        let id = SessionId::new("abc123").unwrap();
        store.set(&id);
        assert_eq!(store.get(), Some(id));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "abc123");

        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");
        std::fs::write(&path, "xyz\n").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.get(), Some(SessionId::new("xyz").unwrap()));
    }

    #[test]
    fn test_padded_file_reads_trimmed_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");
        std::fs::write(&path, "  abc123 \r\n").unwrap();

        let id = FileSessionStore::new(&path).get().unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_blank_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session_id");
        std::fs::write(&path, "  \n").unwrap();

        assert_eq!(FileSessionStore::new(&path).get(), None);
    }

    #[test]
    fn test_unusable_medium_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be: reads, writes and deletes all fail
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();
        let store = FileSessionStore::new(&path);

        store.set(&SessionId::new("abc").unwrap());
        assert_eq!(store.get(), None);
        store.clear();
        assert!(path.is_dir());
    }

    #[test]
    fn test_clear_without_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        FileSessionStore::new(dir.path().join("missing")).clear();
    }

    #[test]
    fn test_default_path_names_app() {
        if let Some(path) = FileSessionStore::default_path() {
            assert!(path.to_string_lossy().contains("agentroom"));
        }
    }
}
