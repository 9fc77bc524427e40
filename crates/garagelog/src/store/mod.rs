//! # Storage Layer
//!
//! The garage persists four records in a flat key-value store, one serialized
//! JSON value per key. Each repository exclusively owns its key.
//!
//! | Key | Record | Owner |
//! |-----|--------|-------|
//! | `garage.mods.v1` | array of mod entries, newest insertion first | [`mods::ModRepository`] |
//! | `garage.services.v1` | array of service entries, newest insertion first | [`services::ServiceRepository`] |
//! | `garage.car.v2` | car profile object | [`car::CarProfileRepository`] |
//! | `garage.trophies.unlocked.v1` | array of trophy ids | [`unlocked::UnlockedTrophyRepository`] |
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: the raw key-value capability (get/set/remove text).
//!   - [`fs_backend::FsBackend`]: production, `<data_dir>/<key>.json` with atomic writes.
//!   - [`mem_backend::MemBackend`]: tests, with read/write failure simulation.
//! - [`garage_store::GarageStore`]: typed JSON I/O and the change notifier.
//! - Repositories: record-level CRUD, borrowed from the store (`store.mods()`).
//!
//! ## Failure Model
//!
//! Reads never fail: a missing key, an unreadable backend, or a malformed
//! payload all resolve to an empty collection or the default profile.
//! Writes propagate backend errors, and only a successful write publishes a
//! change notification.
//!
//! ## Concurrency
//!
//! Every mutation is a read-modify-write of the whole value with no locking or
//! versioning. Two interleaved read-modify-write sequences on the same key can
//! lose one update; the garage is single-user and single-process.

pub mod backend;
pub mod car;
pub mod fs_backend;
pub mod garage_store;
pub mod mem_backend;
pub mod mods;
pub mod services;
pub mod unlocked;

pub const MODS_KEY: &str = "garage.mods.v1";
pub const SERVICES_KEY: &str = "garage.services.v1";
pub const CAR_KEY: &str = "garage.car.v2";
pub const UNLOCKED_TROPHIES_KEY: &str = "garage.trophies.unlocked.v1";
