use super::backend::StorageBackend;
use super::car::CarProfileRepository;
use super::mods::ModRepository;
use super::services::ServiceRepository;
use super::unlocked::UnlockedTrophyRepository;
use crate::error::{GarageError, Result};
use crate::notifier::ChangeNotifier;
use crate::trophies::TrophyEngine;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Typed record I/O over a [`StorageBackend`], plus the injected
/// [`ChangeNotifier`] that repositories publish to after each write.
pub struct GarageStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    notifier: ChangeNotifier,
}

impl<B: StorageBackend> GarageStore<B> {
    pub fn new(backend: B, notifier: ChangeNotifier) -> Self {
        Self { backend, notifier }
    }

    pub fn with_backend(backend: B) -> Self {
        Self::new(backend, ChangeNotifier::new())
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn mods(&self) -> ModRepository<'_, B> {
        ModRepository::new(self)
    }

    pub fn services(&self) -> ServiceRepository<'_, B> {
        ServiceRepository::new(self)
    }

    pub fn car(&self) -> CarProfileRepository<'_, B> {
        CarProfileRepository::new(self)
    }

    pub fn unlocked_trophies(&self) -> UnlockedTrophyRepository<'_, B> {
        UnlockedTrophyRepository::new(self)
    }

    pub fn trophies(&self) -> TrophyEngine<'_, B> {
        TrophyEngine::new(self)
    }

    /// Read and parse the JSON stored under `key`.
    ///
    /// Soft-fails: an absent key, a backend read error, or unparseable text all
    /// yield `None`. Only the latter two are logged.
    pub(crate) fn read_value(&self, key: &str) -> Option<Value> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "stored payload is malformed, using defaults");
                None
            }
        }
    }

    pub(crate) fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string(value).map_err(GarageError::Serialization)?;
        self.backend.set(key, &content)?;
        debug!(key, bytes = content.len(), "stored");
        Ok(())
    }

    pub(crate) fn remove_key(&self, key: &str) -> Result<()> {
        self.backend.remove(key)?;
        debug!(key, "removed");
        Ok(())
    }

    /// Signal listeners that a write has completed.
    pub(crate) fn changed(&self) {
        self.notifier.publish();
    }
}
