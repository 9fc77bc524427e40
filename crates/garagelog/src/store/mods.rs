use super::backend::StorageBackend;
use super::garage_store::GarageStore;
use super::MODS_KEY;
use crate::error::Result;
use crate::model::ModEntry;
use crate::normalize::mods_from_value;

/// CRUD over the mod collection. Order is newest insertion first; dates never
/// reorder entries.
pub struct ModRepository<'s, B: StorageBackend> {
    store: &'s GarageStore<B>,
}

impl<'s, B: StorageBackend> ModRepository<'s, B> {
    pub(crate) fn new(store: &'s GarageStore<B>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<ModEntry> {
        self.store
            .read_value(MODS_KEY)
            .map(|value| mods_from_value(MODS_KEY, &value))
            .unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<ModEntry> {
        self.list().into_iter().find(|m| m.id == id)
    }

    /// Prepend `entry`. The caller supplies the id.
    pub fn add(&self, entry: ModEntry) -> Result<()> {
        let mut mods = self.list();
        mods.insert(0, entry);
        self.write(&mods)
    }

    /// Replace every entry whose id matches, in place. Returns whether any
    /// matched; the collection is rewritten either way.
    pub fn update(&self, entry: ModEntry) -> Result<bool> {
        let mut mods = self.list();
        let mut found = false;
        for slot in mods.iter_mut().filter(|m| m.id == entry.id) {
            *slot = entry.clone();
            found = true;
        }
        self.write(&mods)?;
        Ok(found)
    }

    /// Remove every entry with `id`. Returns the first one removed so a
    /// caller can offer undo.
    pub fn delete(&self, id: &str) -> Result<Option<ModEntry>> {
        let mut mods = self.list();
        let removed = mods.iter().find(|m| m.id == id).cloned();
        mods.retain(|m| m.id != id);
        self.write(&mods)?;
        Ok(removed)
    }

    /// Overwrite the whole collection in the given order.
    pub fn replace_all(&self, mods: &[ModEntry]) -> Result<()> {
        self.write(mods)
    }

    /// Remove the key entirely.
    pub fn clear(&self) -> Result<()> {
        self.store.remove_key(MODS_KEY)?;
        self.store.changed();
        Ok(())
    }

    fn write(&self, mods: &[ModEntry]) -> Result<()> {
        self.store.write_json(MODS_KEY, mods)?;
        self.store.changed();
        Ok(())
    }
}
