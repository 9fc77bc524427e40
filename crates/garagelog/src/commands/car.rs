use chrono::{DateTime, Utc};

use crate::commands::non_blank;
use crate::error::Result;
use crate::model::{to_iso, CarProfile, CarSpecs, MileageUnit, DEFAULT_CAR_NAME};
use crate::normalize::parse_number;
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;

/// Raw spec-sheet form input. Numeric fields use the numeric input policy;
/// blank text fields clear the value.
#[derive(Debug, Clone, Default)]
pub struct SpecsDraft {
    pub bhp: String,
    pub mpg: String,
    pub zero_to_sixty: String,
    pub drivetrain: String,
    pub transmission: String,
    pub colour: String,
}

impl SpecsDraft {
    fn into_specs(self) -> CarSpecs {
        CarSpecs {
            bhp: parse_number(&self.bhp),
            mpg: parse_number(&self.mpg),
            zero_to_sixty: parse_number(&self.zero_to_sixty),
            drivetrain: non_blank(&self.drivetrain),
            transmission: non_blank(&self.transmission),
            colour: non_blank(&self.colour),
        }
    }
}

pub fn rename<B: StorageBackend>(store: &GarageStore<B>, name: &str) -> Result<CarProfile> {
    let name = non_blank(name).unwrap_or_else(|| DEFAULT_CAR_NAME.to_string());
    store.car().update(|car| car.name = name)
}

pub fn set_garage_title<B: StorageBackend>(
    store: &GarageStore<B>,
    title: &str,
) -> Result<CarProfile> {
    let title = title.trim().to_string();
    store.car().update(|car| car.garage_title = title)
}

/// Set or clear the hero image (an opaque URI or data URL).
pub fn set_hero_image<B: StorageBackend>(
    store: &GarageStore<B>,
    uri: Option<String>,
) -> Result<CarProfile> {
    let uri = uri.filter(|u| !u.is_empty());
    store.car().update(|car| car.hero_image_uri = uri)
}

pub fn set_mileage<B: StorageBackend>(store: &GarageStore<B>, raw: &str) -> Result<CarProfile> {
    let mileage = parse_number(raw);
    store.car().update(|car| car.current_mileage = mileage)
}

pub fn set_mileage_unit<B: StorageBackend>(
    store: &GarageStore<B>,
    unit: MileageUnit,
) -> Result<CarProfile> {
    store.car().update(|car| car.mileage_unit = unit)
}

pub fn set_mot_expiry<B: StorageBackend>(
    store: &GarageStore<B>,
    expiry: DateTime<Utc>,
) -> Result<CarProfile> {
    let iso = to_iso(expiry);
    store.car().update(|car| car.mot_expiry_iso = Some(iso))
}

pub fn clear_mot<B: StorageBackend>(store: &GarageStore<B>) -> Result<CarProfile> {
    store.car().update(|car| car.mot_expiry_iso = None)
}

pub fn save_specs<B: StorageBackend>(
    store: &GarageStore<B>,
    draft: SpecsDraft,
) -> Result<CarProfile> {
    let specs = draft.into_specs();
    store.car().update(|car| car.specs = specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use chrono::TimeZone;

    fn store() -> GarageStore<MemBackend> {
        GarageStore::with_backend(MemBackend::new())
    }

    #[test]
    fn rename_trims_and_defaults() {
        let store = store();
        assert_eq!(rename(&store, "  Miata ").unwrap().name, "Miata");
        assert_eq!(rename(&store, "   ").unwrap().name, "My Car");
        assert_eq!(store.car().get().name, "My Car");
    }

    #[test]
    fn edits_preserve_other_fields() {
        let store = store();
        set_mileage(&store, " 64000 ").unwrap();
        set_mileage_unit(&store, MileageUnit::Km).unwrap();
        set_hero_image(&store, Some("file:///hero.jpg".into())).unwrap();
        set_garage_title(&store, " Track Rats ").unwrap();

        let car = store.car().get();
        assert_eq!(car.current_mileage, Some(64000.0));
        assert_eq!(car.mileage_unit, MileageUnit::Km);
        assert_eq!(car.hero_image_uri.as_deref(), Some("file:///hero.jpg"));
        assert_eq!(car.garage_title, "Track Rats");

        set_mileage(&store, "lots").unwrap();
        set_hero_image(&store, None).unwrap();
        let car = store.car().get();
        assert_eq!(car.current_mileage, None);
        assert_eq!(car.hero_image_uri, None);
        assert_eq!(car.mileage_unit, MileageUnit::Km);
    }

    #[test]
    fn mot_set_and_clear() {
        let store = store();
        let expiry = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        let car = set_mot_expiry(&store, expiry).unwrap();
        assert_eq!(car.mot_expiry_iso.as_deref(), Some("2025-03-14T09:30:00.000Z"));

        clear_mot(&store).unwrap();
        assert_eq!(store.car().get().mot_expiry_iso, None);
    }

    #[test]
    fn specs_from_form_input() {
        let store = store();
        let car = save_specs(
            &store,
            SpecsDraft {
                bhp: "420".into(),
                mpg: "".into(),
                zero_to_sixty: "4.2".into(),
                drivetrain: "AWD".into(),
                transmission: " ".into(),
                colour: "Nardo Grey".into(),
            },
        )
        .unwrap();
        assert_eq!(car.specs.bhp, Some(420.0));
        assert_eq!(car.specs.mpg, None);
        assert_eq!(car.specs.zero_to_sixty, Some(4.2));
        assert_eq!(car.specs.drivetrain.as_deref(), Some("AWD"));
        assert_eq!(car.specs.transmission, None);
        assert!(!car.specs.is_complete());
    }
}
