use crate::error::Result;

/// Abstract interface for the raw key-value substrate.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`GarageStore`](super::garage_store::GarageStore) and the repositories
/// handle the "what" (record shapes, defaulting, change notification).
///
/// Values are opaque serialized text. All methods take `&self`; backends
/// that hold state use interior mutability.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
