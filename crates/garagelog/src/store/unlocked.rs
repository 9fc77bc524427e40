use super::backend::StorageBackend;
use super::garage_store::GarageStore;
use super::UNLOCKED_TROPHIES_KEY;
use crate::error::Result;
use crate::normalize::trophy_ids_from_value;

/// Durable record of which trophy ids have already been unlocked.
///
/// Written only by the trophy engine (and by an explicit reset). Writes here
/// do not publish a change notification: they are bookkeeping for the very
/// check a notification triggers.
pub struct UnlockedTrophyRepository<'s, B: StorageBackend> {
    store: &'s GarageStore<B>,
}

impl<'s, B: StorageBackend> UnlockedTrophyRepository<'s, B> {
    pub(crate) fn new(store: &'s GarageStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<String> {
        self.store
            .read_value(UNLOCKED_TROPHIES_KEY)
            .map(|value| trophy_ids_from_value(&value))
            .unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list().iter().any(|known| known == id)
    }

    pub fn save(&self, ids: &[String]) -> Result<()> {
        self.store.write_json(UNLOCKED_TROPHIES_KEY, ids)
    }

    /// Forget every unlock. The only operation that shrinks the set.
    pub fn clear(&self) -> Result<()> {
        self.store.remove_key(UNLOCKED_TROPHIES_KEY)
    }
}
