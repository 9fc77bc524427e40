//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the
//! repositories. It is the single entry point for every garage operation,
//! whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the store, the change notifier and the trophy watcher
//! - **Dispatches** to the appropriate command function or repository
//! - **Supplies ambient inputs** such as today's date and configured limits
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and `trophies.rs`
//! - **Presentation**: it returns data structures, not strings for a screen
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `GarageApi<FsBackend>` via [`GarageApi::open`]
//! - Testing: `GarageApi<MemBackend>` via [`GarageApi::with_backend`]
//!
//! ## Trophy Toasts
//!
//! Every successful write publishes a change, which the attached
//! [`TrophyWatcher`] turns into at most one pending toast. UIs poll
//! [`GarageApi::pending_toast`] and call [`GarageApi::dismiss_toast`] when the
//! user closes it.

use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::commands;
use crate::commands::car::SpecsDraft;
use crate::commands::mods::ModDraft;
use crate::commands::services::ServiceDraft;
use crate::commands::summary::GarageSummary;
use crate::config::GarageConfig;
use crate::error::Result;
use crate::model::{CarProfile, MileageUnit, ModEntry, ServiceEntry};
use crate::notifier::Subscription;
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::garage_store::GarageStore;
use crate::trophies::TrophyDefinition;
use crate::watch::TrophyWatcher;

pub struct GarageApi<B: StorageBackend + 'static> {
    store: Rc<GarageStore<B>>,
    watcher: TrophyWatcher<B>,
    config: GarageConfig,
}

impl GarageApi<FsBackend> {
    /// Open the file-backed garage in the configured data directory.
    pub fn open(config: GarageConfig) -> Result<Self> {
        let root = config.resolved_data_dir()?;
        info!(root = %root.display(), "opening garage");
        Ok(Self::with_backend(FsBackend::new(root), config))
    }
}

impl<B: StorageBackend + 'static> GarageApi<B> {
    pub fn with_backend(backend: B, config: GarageConfig) -> Self {
        let store = Rc::new(GarageStore::with_backend(backend));
        let watcher = TrophyWatcher::attach(Rc::clone(&store));
        Self {
            store,
            watcher,
            config,
        }
    }

    pub fn store(&self) -> &GarageStore<B> {
        &self.store
    }

    pub fn config(&self) -> &GarageConfig {
        &self.config
    }

    /// Register an extra change listener (e.g. a UI refresh).
    #[must_use]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.store.notifier().subscribe(listener)
    }

    // --- mods ---

    pub fn list_mods(&self) -> Vec<ModEntry> {
        self.store.mods().list()
    }

    pub fn get_mod(&self, id: &str) -> Option<ModEntry> {
        self.store.mods().get(id)
    }

    pub fn add_mod(&self, draft: ModDraft) -> Result<ModEntry> {
        commands::mods::add(&self.store, draft)
    }

    pub fn edit_mod(&self, id: &str, draft: ModDraft) -> Result<Option<ModEntry>> {
        commands::mods::edit(&self.store, id, draft)
    }

    pub fn delete_mod(&self, id: &str) -> Result<Option<ModEntry>> {
        commands::mods::delete(&self.store, id)
    }

    /// Put back a mod returned by [`GarageApi::delete_mod`].
    pub fn restore_mod(&self, entry: ModEntry) -> Result<()> {
        commands::mods::restore(&self.store, entry)
    }

    // --- services ---

    pub fn list_services(&self) -> Vec<ServiceEntry> {
        self.store.services().list()
    }

    pub fn log_service(&self, draft: ServiceDraft) -> Result<ServiceEntry> {
        commands::services::log(&self.store, draft)
    }

    pub fn delete_service(&self, id: &str) -> Result<Option<ServiceEntry>> {
        commands::services::delete(&self.store, id)
    }

    // --- car ---

    pub fn car(&self) -> CarProfile {
        self.store.car().get()
    }

    pub fn rename_car(&self, name: &str) -> Result<CarProfile> {
        commands::car::rename(&self.store, name)
    }

    pub fn set_garage_title(&self, title: &str) -> Result<CarProfile> {
        commands::car::set_garage_title(&self.store, title)
    }

    pub fn set_hero_image(&self, uri: Option<String>) -> Result<CarProfile> {
        commands::car::set_hero_image(&self.store, uri)
    }

    pub fn set_mileage(&self, raw: &str) -> Result<CarProfile> {
        commands::car::set_mileage(&self.store, raw)
    }

    pub fn set_mileage_unit(&self, unit: MileageUnit) -> Result<CarProfile> {
        commands::car::set_mileage_unit(&self.store, unit)
    }

    pub fn set_mot_expiry(&self, expiry: DateTime<Utc>) -> Result<CarProfile> {
        commands::car::set_mot_expiry(&self.store, expiry)
    }

    pub fn clear_mot(&self) -> Result<CarProfile> {
        commands::car::clear_mot(&self.store)
    }

    pub fn save_specs(&self, draft: SpecsDraft) -> Result<CarProfile> {
        commands::car::save_specs(&self.store, draft)
    }

    // --- trophies ---

    /// All nine trophies with their current earned state, in display order.
    pub fn trophies(&self) -> Vec<TrophyDefinition> {
        self.store.trophies().evaluate()
    }

    pub fn pending_toast(&self) -> Option<TrophyDefinition> {
        self.watcher.current_toast()
    }

    pub fn dismiss_toast(&self) -> Option<TrophyDefinition> {
        self.watcher.dismiss_toast()
    }

    /// Run a trophy check without waiting for a change.
    pub fn check_trophies(&self) {
        self.watcher.check_now();
    }

    // --- settings ---

    pub fn reset_mods(&self) -> Result<()> {
        commands::settings::reset_mods(&self.store)
    }

    pub fn clear_service_history(&self) -> Result<()> {
        commands::settings::clear_service_history(&self.store)
    }

    pub fn reset_garage(&self) -> Result<()> {
        commands::settings::reset_garage(&self.store)
    }

    pub fn reset_trophies(&self) -> Result<()> {
        commands::settings::reset_trophies(&self.store)
    }

    // --- summary ---

    pub fn summary(&self) -> GarageSummary {
        self.summary_on(Utc::now().date_naive())
    }

    /// The garage overview as of the given UTC day.
    pub fn summary_on(&self, today: NaiveDate) -> GarageSummary {
        commands::summary::run(
            &self.store,
            today,
            self.config.mot_warn_days,
            self.config.recent_mods,
        )
    }
}
