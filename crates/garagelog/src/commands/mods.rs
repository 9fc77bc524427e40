use crate::commands::non_blank;
use crate::error::{GarageError, Result};
use crate::model::{ModEntry, ModStatus};
use crate::normalize::parse_number;
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;

pub const UNTITLED_MOD: &str = "Untitled mod";

/// Raw form input for a mod.
#[derive(Debug, Clone, Default)]
pub struct ModDraft {
    pub title: String,
    /// Free text; parsed with the numeric input policy.
    pub cost: String,
    pub notes: String,
    pub before_uri: Option<String>,
    pub after_uri: Option<String>,
    pub status: ModStatus,
}

impl ModDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Pre-fill a draft from a stored entry, as an edit form would.
    pub fn from_entry(entry: &ModEntry) -> Self {
        Self {
            title: entry.title.clone(),
            cost: entry.cost.map(|c| c.to_string()).unwrap_or_default(),
            notes: entry.notes.clone(),
            before_uri: entry.before_uri.clone(),
            after_uri: entry.after_uri.clone(),
            status: entry.status,
        }
    }

    fn apply_to(self, entry: &mut ModEntry, title: String) {
        entry.title = title;
        entry.cost = parse_number(&self.cost);
        entry.notes = self.notes.trim().to_string();
        entry.before_uri = self.before_uri.filter(|u| !u.is_empty());
        entry.after_uri = self.after_uri.filter(|u| !u.is_empty());
        entry.status = self.status;
    }
}

/// Create a mod dated now with a fresh id and put it at the top of the list.
pub fn add<B: StorageBackend>(store: &GarageStore<B>, draft: ModDraft) -> Result<ModEntry> {
    let title = non_blank(&draft.title)
        .ok_or_else(|| GarageError::Invalid("A mod needs a title".to_string()))?;

    let mut entry = ModEntry::new(String::new());
    draft.apply_to(&mut entry, title);

    store.mods().add(entry.clone())?;
    Ok(entry)
}

/// Apply `draft` to the mod with `id`, keeping its id, date and position.
/// Returns `Ok(None)` when no mod has that id.
pub fn edit<B: StorageBackend>(
    store: &GarageStore<B>,
    id: &str,
    draft: ModDraft,
) -> Result<Option<ModEntry>> {
    let Some(mut entry) = store.mods().get(id) else {
        return Ok(None);
    };
    let title = non_blank(&draft.title).unwrap_or_else(|| UNTITLED_MOD.to_string());
    draft.apply_to(&mut entry, title);

    store.mods().update(entry.clone())?;
    Ok(Some(entry))
}

/// Delete by id, returning the removed entry for [`restore`].
pub fn delete<B: StorageBackend>(store: &GarageStore<B>, id: &str) -> Result<Option<ModEntry>> {
    store.mods().delete(id)
}

/// Undo a delete: put the entry back at the top of the list.
pub fn restore<B: StorageBackend>(store: &GarageStore<B>, entry: ModEntry) -> Result<()> {
    store.mods().add(entry)
}
