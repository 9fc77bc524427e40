use chrono::{NaiveDate, TimeZone, Utc};
use garagelog::api::GarageApi;
use garagelog::commands::car::SpecsDraft;
use garagelog::commands::mods::ModDraft;
use garagelog::config::GarageConfig;
use garagelog::model::ModStatus;
use garagelog::trophies::TrophyId;
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> GarageApi<garagelog::store::fs_backend::FsBackend> {
    let config = GarageConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    GarageApi::open(config).unwrap()
}

fn installed(title: &str, cost: &str) -> ModDraft {
    ModDraft {
        title: title.to_string(),
        cost: cost.to_string(),
        status: ModStatus::Installed,
        ..Default::default()
    }
}

#[test]
fn building_up_a_garage_unlocks_trophies_one_toast_at_a_time() {
    let dir = TempDir::new().unwrap();
    let api = open(&dir);

    api.add_mod(installed("Exhaust", "450")).unwrap();
    // first_mod and first_installed become earned together; one is reported.
    assert_eq!(api.dismiss_toast().unwrap().id, TrophyId::FirstMod);
    api.check_trophies();
    assert!(api.pending_toast().is_none());

    for (title, cost) in [("Intake", "200"), ("Coilovers", "£900"), ("Seats", ""), ("Wrap", "x")] {
        api.add_mod(installed(title, cost)).unwrap();
        api.dismiss_toast();
    }

    let earned: Vec<TrophyId> = api
        .trophies()
        .into_iter()
        .filter(|t| t.earned)
        .map(|t| t.id)
        .collect();
    assert_eq!(
        earned,
        vec![
            TrophyId::FirstMod,
            TrophyId::FirstInstalled,
            TrophyId::FiveInstalled,
        ]
    );

    let unlocked = api.store().unlocked_trophies().list();
    assert!(unlocked.contains(&"five_installed".to_string()));
}

#[test]
fn spec_sheet_and_mot_flow() {
    let dir = TempDir::new().unwrap();
    let api = open(&dir);

    api.save_specs(SpecsDraft {
        bhp: "300".into(),
        mpg: "28.5".into(),
        zero_to_sixty: "5.4".into(),
        drivetrain: "RWD".into(),
        transmission: "Manual".into(),
        colour: "Red".into(),
    })
    .unwrap();
    assert_eq!(api.dismiss_toast().unwrap().id, TrophyId::SpecMaster);

    let expiry = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
    api.set_mot_expiry(expiry).unwrap();
    assert_eq!(api.dismiss_toast().unwrap().id, TrophyId::MotSet);
    assert_eq!(
        api.car().mot_expiry_iso.as_deref(),
        Some("2024-07-01T09:00:00.000Z")
    );

    let summary = api.summary_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    let mot = summary.mot.unwrap();
    assert_eq!(mot.days, 30);
    assert_eq!(mot.text, "Due in 30 days");
    assert_eq!(summary.trophies_earned, 2);
}

#[test]
fn unlocked_trophies_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let api = open(&dir);
        api.set_mileage("61,000").unwrap();
        assert!(api.pending_toast().is_none());
        api.set_mileage("61000").unwrap();
        assert_eq!(api.dismiss_toast().unwrap().id, TrophyId::MileageSet);
    }

    let api = open(&dir);
    api.check_trophies();
    assert!(api.pending_toast().is_none());

    api.reset_trophies().unwrap();
    api.check_trophies();
    assert_eq!(api.pending_toast().unwrap().id, TrophyId::MileageSet);
}

#[test]
fn hand_edited_files_are_normalized() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("garage.mods.v1.json"),
        r#"[{"title":"Brakes","cost":" 12.5 ","status":"bogus"},42,{"id":"keep","title":"Lights","cost":100}]"#,
    )
    .unwrap();

    let api = open(&dir);
    let mods = api.list_mods();
    assert_eq!(mods.len(), 2);
    assert_eq!(mods[0].title, "Brakes");
    assert_eq!(mods[0].id, "");
    assert_eq!(mods[0].cost, Some(12.5));
    assert_eq!(mods[0].status, ModStatus::Installed);
    assert_eq!(mods[1].id, "keep");
    assert_eq!(mods[1].cost, Some(100.0));
}
