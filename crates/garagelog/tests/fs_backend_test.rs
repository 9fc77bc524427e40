use garagelog::store::backend::StorageBackend;
use garagelog::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing key
    assert_eq!(backend.get("garage.mods.v1").unwrap(), None);

    // 2. Write then read
    backend.set("garage.mods.v1", "[]").unwrap();
    assert_eq!(backend.get("garage.mods.v1").unwrap(), Some("[]".to_string()));

    // 3. Overwrite
    backend.set("garage.mods.v1", r#"[{"title":"Exhaust"}]"#).unwrap();
    assert_eq!(
        backend.get("garage.mods.v1").unwrap(),
        Some(r#"[{"title":"Exhaust"}]"#.to_string())
    );

    // 4. Remove
    backend.remove("garage.mods.v1").unwrap();
    assert_eq!(backend.get("garage.mods.v1").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.set("garage.car.v2", r#"{"name":"Golf"}"#).unwrap();

    let expected_path = dir.path().join("garage.car.v2.json");
    assert_eq!(backend.key_path("garage.car.v2"), expected_path);
    assert_eq!(
        fs::read_to_string(&expected_path).unwrap(),
        r#"{"name":"Golf"}"#
    );

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_remove_missing_is_noop() {
    let (_dir, backend) = setup();
    backend.remove("garage.services.v1").unwrap();
}

#[test]
fn test_fs_backend_creates_nested_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let backend = FsBackend::new(root.clone());
    backend.set("garage.trophies.unlocked.v1", "[]").unwrap();
    assert!(root.join("garage.trophies.unlocked.v1.json").exists());
}
