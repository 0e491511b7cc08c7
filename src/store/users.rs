//! Durable credential store: email -> User, backed by a single JSON file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// File-backed user store.
///
/// The in-memory map and the durable file converge immediately after each
/// write; a crash between the two loses the write (at-most-once durability).
/// Reads take a shared lock; mutations take the write lock for the whole
/// check-then-act-then-persist sequence.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Open the store, loading the durable file if present.
    ///
    /// A missing file is an empty store. An unparsable file is a fatal
    /// `CorruptStore` error; callers must abort startup rather than start
    /// empty over unreadable records.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let users = load_map(&path)?;
        debug!(path = %path.display(), count = users.len(), "user store loaded");
        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(email)
            .cloned()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.users
            .read()
            .expect("user store lock poisoned")
            .contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.users.read().expect("user store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a user that must not already exist.
    ///
    /// The duplicate check, the in-memory insert, and the flush to disk all
    /// happen under one write lock, so two concurrent registrations for the
    /// same email cannot both succeed.
    pub fn insert_new(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user);
        persist(&self.path, &users)
    }
}

fn load_map(path: &Path) -> AppResult<HashMap<String, User>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw).map_err(|e| AppError::CorruptStore {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write the whole map to `<path>.tmp`, then rename over `path` so a
/// concurrent or subsequent read never observes a partial file.
fn persist(path: &Path, users: &HashMap<String, User>) -> AppResult<()> {
    let tmp = path.with_extension("tmp");
    let data = serde_json::to_string_pretty(users)?;
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(email: &str) -> User {
        User {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("users.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn insert_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let store = UserStore::open(&path).unwrap();
        store.insert_new(user("a@example.com")).unwrap();
        drop(store);

        let reopened = UserStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        let loaded = reopened.get("a@example.com").unwrap();
        assert_eq!(loaded.name, "Test User");
        assert_eq!(loaded.password_hash, "$argon2id$stub");
    }

    #[test]
    fn duplicate_insert_rejected_and_first_record_kept() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("users.json")).unwrap();

        let mut first = user("a@example.com");
        first.name = "First".to_string();
        store.insert_new(first).unwrap();

        let mut second = user("a@example.com");
        second.name = "Second".to_string();
        let err = store.insert_new(second).unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));

        assert_eq!(store.get("a@example.com").unwrap().name, "First");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn corrupt_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not json at all").unwrap();

        let err = UserStore::open(&path).unwrap_err();
        assert!(matches!(err, AppError::CorruptStore { .. }));
    }

    #[test]
    fn get_unknown_email_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::open(dir.path().join("users.json")).unwrap();
        assert!(store.get("nobody@example.com").is_none());
        assert!(!store.contains("nobody@example.com"));
    }
}
