use crate::commands::non_blank;
use crate::error::{GarageError, Result};
use crate::model::ServiceEntry;
use crate::normalize::parse_number;
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;

#[derive(Debug, Clone, Default)]
pub struct ServiceDraft {
    pub service_type: String,
    pub mileage: String,
    pub notes: String,
}

/// Log a service dated now.
pub fn log<B: StorageBackend>(store: &GarageStore<B>, draft: ServiceDraft) -> Result<ServiceEntry> {
    let service_type = non_blank(&draft.service_type)
        .ok_or_else(|| GarageError::Invalid("A service entry needs a type".to_string()))?;

    let mut entry = ServiceEntry::new(service_type);
    entry.mileage = parse_number(&draft.mileage);
    entry.notes = draft.notes.trim().to_string();

    store.services().add(entry.clone())?;
    Ok(entry)
}

pub fn delete<B: StorageBackend>(
    store: &GarageStore<B>,
    id: &str,
) -> Result<Option<ServiceEntry>> {
    store.services().delete(id)
}
