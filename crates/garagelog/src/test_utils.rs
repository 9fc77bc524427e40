use crate::store::fs_backend::FsBackend;
use crate::store::garage_store::GarageStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub store: GarageStore<FsBackend>,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("data");
        let store = GarageStore::with_backend(FsBackend::new(root.clone()));
        Self {
            _temp_dir: temp_dir,
            store,
            root,
        }
    }

    /// A second store over the same directory, as a fresh process would see it.
    pub fn reopen(&self) -> GarageStore<FsBackend> {
        GarageStore::with_backend(FsBackend::new(self.root.clone()))
    }
}
