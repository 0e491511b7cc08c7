//! Durable destination catalog: id -> Destination, backed by a JSON file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Destination, DestinationUpdate};

#[derive(Serialize, Deserialize)]
struct Catalog {
    next_id: u64,
    destinations: HashMap<u64, Destination>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            next_id: 1,
            destinations: HashMap::new(),
        }
    }
}

/// File-backed destination store with a monotonically increasing id counter.
/// Same locking and temp-then-rename persistence discipline as the user
/// store.
pub struct DestinationStore {
    path: PathBuf,
    inner: RwLock<Catalog>,
}

impl DestinationStore {
    /// Open the store; missing file means an empty catalog, an unparsable
    /// file is fatal.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let catalog = load_catalog(&path)?;
        debug!(
            path = %path.display(),
            count = catalog.destinations.len(),
            "destination store loaded"
        );
        Ok(Self {
            path,
            inner: RwLock::new(catalog),
        })
    }

    pub fn insert(&self, name: &str, description: &str, location: &str) -> AppResult<Destination> {
        let mut catalog = self.inner.write().expect("destination store lock poisoned");
        let destination = Destination {
            id: catalog.next_id,
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
        };
        catalog.next_id += 1;
        catalog
            .destinations
            .insert(destination.id, destination.clone());
        persist(&self.path, &catalog)?;
        Ok(destination)
    }

    /// All destinations, ordered by id.
    pub fn list(&self) -> Vec<Destination> {
        let catalog = self.inner.read().expect("destination store lock poisoned");
        let mut all: Vec<Destination> = catalog.destinations.values().cloned().collect();
        all.sort_by_key(|d| d.id);
        all
    }

    pub fn get(&self, id: u64) -> Option<Destination> {
        self.inner
            .read()
            .expect("destination store lock poisoned")
            .destinations
            .get(&id)
            .cloned()
    }

    /// Apply a per-field partial update; absent fields are untouched.
    pub fn update(&self, id: u64, update: DestinationUpdate) -> AppResult<Destination> {
        let mut catalog = self.inner.write().expect("destination store lock poisoned");
        let destination = catalog
            .destinations
            .get_mut(&id)
            .ok_or(AppError::DestinationNotFound)?;
        if let Some(name) = update.name {
            destination.name = name;
        }
        if let Some(description) = update.description {
            destination.description = description;
        }
        if let Some(location) = update.location {
            destination.location = location;
        }
        let updated = destination.clone();
        persist(&self.path, &catalog)?;
        Ok(updated)
    }

    pub fn remove(&self, id: u64) -> AppResult<()> {
        let mut catalog = self.inner.write().expect("destination store lock poisoned");
        if catalog.destinations.remove(&id).is_none() {
            return Err(AppError::DestinationNotFound);
        }
        persist(&self.path, &catalog)
    }
}

fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Catalog::default());
        }
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw).map_err(|e| AppError::CorruptStore {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn persist(path: &Path, catalog: &Catalog) -> AppResult<()> {
    let tmp = path.with_extension("tmp");
    let data = serde_json::to_string_pretty(catalog)?;
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = DestinationStore::open(dir.path().join("destinations.json")).unwrap();

        let paris = store.insert("Paris", "City of lights", "France").unwrap();
        let tokyo = store.insert("Tokyo", "Metropolis", "Japan").unwrap();
        assert_eq!(paris.id, 1);
        assert_eq!(tokyo.id, 2);

        let all = store.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Paris");
        assert_eq!(all[1].name, "Tokyo");
    }

    #[test]
    fn id_counter_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("destinations.json");

        let store = DestinationStore::open(&path).unwrap();
        store.insert("Paris", "City of lights", "France").unwrap();
        store.remove(1).unwrap();
        drop(store);

        let reopened = DestinationStore::open(&path).unwrap();
        let next = reopened.insert("Tokyo", "Metropolis", "Japan").unwrap();
        assert_eq!(next.id, 2, "ids are never reused after reopen");
    }

    #[test]
    fn partial_update_leaves_other_fields_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = DestinationStore::open(dir.path().join("destinations.json")).unwrap();
        let dest = store.insert("Paris", "City of lights", "France").unwrap();

        let updated = store
            .update(
                dest.id,
                DestinationUpdate {
                    description: Some("Capital of France".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Paris");
        assert_eq!(updated.description, "Capital of France");
        assert_eq!(updated.location, "France");
    }

    #[test]
    fn update_and_remove_unknown_id_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DestinationStore::open(dir.path().join("destinations.json")).unwrap();

        assert!(matches!(
            store.update(99, DestinationUpdate::default()),
            Err(AppError::DestinationNotFound)
        ));
        assert!(matches!(
            store.remove(99),
            Err(AppError::DestinationNotFound)
        ));
    }

    #[test]
    fn corrupt_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("destinations.json");
        fs::write(&path, "[1, 2, oops").unwrap();
        assert!(matches!(
            DestinationStore::open(&path),
            Err(AppError::CorruptStore { .. })
        ));
    }
}
