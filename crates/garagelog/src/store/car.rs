use super::backend::StorageBackend;
use super::garage_store::GarageStore;
use super::CAR_KEY;
use crate::error::Result;
use crate::model::CarProfile;
use crate::normalize::car_profile_from_value;

/// The singleton car profile. Reads are always fully populated; saves write
/// the complete record.
pub struct CarProfileRepository<'s, B: StorageBackend> {
    store: &'s GarageStore<B>,
}

impl<'s, B: StorageBackend> CarProfileRepository<'s, B> {
    pub(crate) fn new(store: &'s GarageStore<B>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> CarProfile {
        self.store
            .read_value(CAR_KEY)
            .map(|value| car_profile_from_value(&value))
            .unwrap_or_default()
    }

    pub fn save(&self, profile: &CarProfile) -> Result<()> {
        self.store.write_json(CAR_KEY, profile)?;
        self.store.changed();
        Ok(())
    }

    /// Read the current profile, apply `edit`, and save the result.
    ///
    /// Nothing else runs between the read and the write unless `edit` itself
    /// touches the store.
    pub fn update<F>(&self, edit: F) -> Result<CarProfile>
    where
        F: FnOnce(&mut CarProfile),
    {
        let mut profile = self.get();
        edit(&mut profile);
        self.save(&profile)?;
        Ok(profile)
    }

    /// Overwrite with the default profile.
    pub fn reset(&self) -> Result<()> {
        self.save(&CarProfile::default())
    }
}
