use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{mot_countdown, MotCountdown};
use crate::model::{ModEntry, ModStatus, ServiceEntry};
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;
use crate::trophies::{evaluate_facts, TrophyFacts, TrophyId};

/// Everything the garage overview shows, computed from one read of each record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarageSummary {
    pub garage_title: String,
    pub car_name: String,
    /// The profile's hero image, else the after image of the newest mod that has one.
    pub hero_image_uri: Option<String>,
    pub mods_count: usize,
    /// Finite costs across all mods, whatever their status.
    pub total_spent: f64,
    pub installed_spend: f64,
    pub recent_mods: Vec<ModEntry>,
    pub service_count: usize,
    pub latest_service: Option<ServiceEntry>,
    pub current_mileage: Option<f64>,
    pub mileage_unit: &'static str,
    pub mot: Option<MotCountdown>,
    pub trophies_earned: usize,
    pub trophies_total: usize,
}

pub fn run<B: StorageBackend>(
    store: &GarageStore<B>,
    today: NaiveDate,
    warn_days: u32,
    recent_limit: usize,
) -> GarageSummary {
    let mods = store.mods().list();
    let services = store.services().list();
    let car = store.car().get();

    let hero_image_uri = car
        .hero_image_uri
        .clone()
        .or_else(|| mods.iter().find_map(|m| m.after_uri.clone()));
    let total_spent = mods.iter().map(ModEntry::spend).sum();
    let installed_spend = mods
        .iter()
        .filter(|m| m.status == ModStatus::Installed)
        .map(ModEntry::spend)
        .sum();
    let mot = car
        .mot_expiry_iso
        .as_deref()
        .and_then(|iso| mot_countdown(iso, today, warn_days));
    let trophies_earned = evaluate_facts(&TrophyFacts::gather(&mods, &car))
        .iter()
        .filter(|t| t.earned)
        .count();

    GarageSummary {
        garage_title: car.garage_title,
        car_name: car.name,
        hero_image_uri,
        mods_count: mods.len(),
        total_spent,
        installed_spend,
        recent_mods: mods.iter().take(recent_limit).cloned().collect(),
        service_count: services.len(),
        latest_service: services.first().cloned(),
        current_mileage: car.current_mileage,
        mileage_unit: car.mileage_unit.label(),
        mot,
        trophies_earned,
        trophies_total: TrophyId::ALL.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::CountdownStatus;
    use crate::model::MileageUnit;
    use crate::store::mem_backend::MemBackend;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn empty_garage_summary() {
        let store = GarageStore::with_backend(MemBackend::new());
        let summary = run(&store, today(), 30, 5);
        assert_eq!(summary.car_name, "My Car");
        assert_eq!(summary.mods_count, 0);
        assert_eq!(summary.total_spent, 0.0);
        assert!(summary.hero_image_uri.is_none());
        assert!(summary.mot.is_none());
        assert_eq!(summary.trophies_earned, 0);
        assert_eq!(summary.trophies_total, 9);
        assert_eq!(summary.mileage_unit, "mi");
    }

    #[test]
    fn totals_recent_and_hero_fallback() {
        let store = GarageStore::with_backend(MemBackend::new());
        let mut with_photo = ModEntry::new("Wrap").with_cost(1200.0);
        with_photo.after_uri = Some("file:///wrap.jpg".into());
        store.mods().add(with_photo).unwrap();
        for i in 0..6 {
            store
                .mods()
                .add(
                    ModEntry::new(format!("Planned {}", i))
                        .with_status(ModStatus::Planned)
                        .with_cost(100.0),
                )
                .unwrap();
        }
        store
            .services()
            .add(ServiceEntry::new("Oil"))
            .unwrap();

        let summary = run(&store, today(), 30, 5);
        assert_eq!(summary.mods_count, 7);
        assert_eq!(summary.total_spent, 1800.0);
        assert_eq!(summary.installed_spend, 1200.0);
        assert_eq!(summary.recent_mods.len(), 5);
        assert_eq!(summary.recent_mods[0].title, "Planned 5");
        assert_eq!(summary.hero_image_uri.as_deref(), Some("file:///wrap.jpg"));
        assert_eq!(summary.service_count, 1);
        assert_eq!(summary.latest_service.unwrap().service_type, "Oil");

        store
            .car()
            .update(|car| car.hero_image_uri = Some("file:///hero.jpg".into()))
            .unwrap();
        let summary = run(&store, today(), 30, 5);
        assert_eq!(summary.hero_image_uri.as_deref(), Some("file:///hero.jpg"));
    }

    #[test]
    fn mot_and_units() {
        let store = GarageStore::with_backend(MemBackend::new());
        store
            .car()
            .update(|car| {
                car.mot_expiry_iso = Some("2024-05-20T00:00:00.000Z".into());
                car.mileage_unit = MileageUnit::Km;
                car.current_mileage = Some(88000.0);
            })
            .unwrap();

        let summary = run(&store, today(), 30, 5);
        let mot = summary.mot.unwrap();
        assert_eq!(mot.status, CountdownStatus::Bad);
        assert_eq!(mot.text, "Overdue by 12 days");
        assert_eq!(summary.mileage_unit, "km");
        assert_eq!(summary.current_mileage, Some(88000.0));
        assert_eq!(summary.trophies_earned, 2);
    }
}
