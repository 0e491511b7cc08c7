//! Destination catalog service over the flat-file store.

use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::models::{Destination, DestinationUpdate};
use crate::store::DestinationStore;

#[derive(Clone)]
pub struct DestinationService {
    store: Arc<DestinationStore>,
}

impl DestinationService {
    pub fn new(store: Arc<DestinationStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, name: &str, description: &str, location: &str) -> AppResult<Destination> {
        let destination = self.store.insert(name, description, location)?;
        info!(id = destination.id, name, "destination added");
        Ok(destination)
    }

    pub fn list(&self) -> Vec<Destination> {
        self.store.list()
    }

    pub fn get(&self, id: u64) -> Option<Destination> {
        self.store.get(id)
    }

    pub fn update(&self, id: u64, update: DestinationUpdate) -> AppResult<Destination> {
        let destination = self.store.update(id, update)?;
        info!(id, "destination updated");
        Ok(destination)
    }

    pub fn delete(&self, id: u64) -> AppResult<()> {
        self.store.remove(id)?;
        info!(id, "destination deleted");
        Ok(())
    }
}
