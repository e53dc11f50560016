use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique path for a CSV file in the system temp directory.
///
/// The file is not created, but it is removed when the path is dropped.
pub(crate) struct TempCsvPath {
    path: PathBuf,
}

impl TempCsvPath {
    pub(crate) fn new(name: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let file_name = format!("daily_budget_{}_{id}_{name}.csv", std::process::id());

        Self {
            path: std::env::temp_dir().join(file_name),
        }
    }

    pub(crate) fn as_path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCsvPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
