use super::backend::StorageBackend;
use crate::error::{GarageError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based backend: one `<key>.json` file per key under a data directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`. Keys are dotted names such as
    /// `garage.mods.v1`, which are already safe file names.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GarageError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GarageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.key_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(GarageError::Io)?;
        fs::rename(&tmp, target).map_err(GarageError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GarageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModEntry, ServiceEntry};
    use crate::store::{CAR_KEY, MODS_KEY};
    use crate::test_utils::TestEnv;

    #[test]
    fn data_dir_is_created_on_first_write() {
        let env = TestEnv::new();
        assert!(!env.root.exists());

        env.store.mods().add(ModEntry::new("Wheels")).unwrap();
        assert!(env.root.join("garage.mods.v1.json").exists());
    }

    #[test]
    fn records_survive_reopen() {
        let env = TestEnv::new();
        env.store.mods().add(ModEntry::new("Turbo")).unwrap();
        env.store.services().add(ServiceEntry::new("MOT")).unwrap();
        env.store
            .car()
            .update(|car| car.name = "Silvia".to_string())
            .unwrap();

        let reopened = env.reopen();
        assert_eq!(reopened.mods().list()[0].title, "Turbo");
        assert_eq!(reopened.services().list()[0].service_type, "MOT");
        assert_eq!(reopened.car().get().name, "Silvia");
    }

    #[test]
    fn corrupt_file_reads_as_defaults() {
        let env = TestEnv::new();
        fs::create_dir_all(&env.root).unwrap();
        fs::write(env.store.backend().key_path(MODS_KEY), "[{").unwrap();
        fs::write(env.store.backend().key_path(CAR_KEY), "null").unwrap();

        assert!(env.store.mods().list().is_empty());
        assert_eq!(env.store.car().get().name, "My Car");
    }

    #[test]
    fn clear_removes_the_file() {
        let env = TestEnv::new();
        env.store.mods().add(ModEntry::new("Decals")).unwrap();
        let path = env.store.backend().key_path(MODS_KEY);
        assert!(path.exists());

        env.store.mods().clear().unwrap();
        assert!(!path.exists());
    }
}
