use super::backend::StorageBackend;
use super::garage_store::GarageStore;
use super::SERVICES_KEY;
use crate::error::Result;
use crate::model::ServiceEntry;
use crate::normalize::services_from_value;

/// Service history. Entries are immutable once logged: there is no update.
pub struct ServiceRepository<'s, B: StorageBackend> {
    store: &'s GarageStore<B>,
}

impl<'s, B: StorageBackend> ServiceRepository<'s, B> {
    pub(crate) fn new(store: &'s GarageStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<ServiceEntry> {
        self.store
            .read_value(SERVICES_KEY)
            .map(|value| services_from_value(SERVICES_KEY, &value))
            .unwrap_or_default()
    }

    pub fn add(&self, entry: ServiceEntry) -> Result<()> {
        let mut services = self.list();
        services.insert(0, entry);
        self.write(&services)
    }

    /// Remove every entry with `id`, returning the first one removed.
    pub fn delete(&self, id: &str) -> Result<Option<ServiceEntry>> {
        let mut services = self.list();
        let removed = services.iter().find(|s| s.id == id).cloned();
        services.retain(|s| s.id != id);
        self.write(&services)?;
        Ok(removed)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove_key(SERVICES_KEY)?;
        self.store.changed();
        Ok(())
    }

    fn write(&self, services: &[ServiceEntry]) -> Result<()> {
        self.store.write_json(SERVICES_KEY, services)?;
        self.store.changed();
        Ok(())
    }
}
