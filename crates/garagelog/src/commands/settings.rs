use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;

/// Delete every mod.
pub fn reset_mods<B: StorageBackend>(store: &GarageStore<B>) -> Result<()> {
    store.mods().clear()
}

pub fn clear_service_history<B: StorageBackend>(store: &GarageStore<B>) -> Result<()> {
    store.services().clear()
}

/// Delete every mod and put the car profile back to defaults. Service history
/// and unlocked trophies are kept.
pub fn reset_garage<B: StorageBackend>(store: &GarageStore<B>) -> Result<()> {
    store.mods().clear()?;
    store.car().reset()
}

/// Forget which trophies were unlocked, so earned ones are announced again.
pub fn reset_trophies<B: StorageBackend>(store: &GarageStore<B>) -> Result<()> {
    store.unlocked_trophies().clear()
}
