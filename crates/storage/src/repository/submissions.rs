//! Append-only CSV submission store.
//!
//! One row per scored submission. The handle is cheap to clone and owns the
//! only mutable resource in the system: every read and write serializes on
//! the internal mutex, so concurrent requests never interleave partial
//! writes. The scoring engine itself never touches this store.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::StoredSubmission;

const HEADERS: [&str; 8] = [
    "submission_id",
    "submitted_at",
    "round",
    "participant",
    "scenario",
    "score",
    "max_score",
    "detail",
];

#[derive(Debug, Clone)]
pub struct SubmissionStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionStore {
    /// Open the store at `path`, creating an empty file with a header row if
    /// none exists yet. No lock is needed here: the handle has not been
    /// shared yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            inner: Arc::new(Inner {
                path: path.into(),
                lock: Mutex::new(()),
            }),
        };
        store.init_file()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Append one scored submission. Rows are never updated or deleted.
    pub async fn append(&self, row: &StoredSubmission) -> Result<()> {
        let _guard = self.inner.lock.lock().await;
        self.init_file()?;

        let file = OpenOptions::new().append(true).open(&self.inner.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }

    /// All stored rows, ordered by submission time.
    pub async fn list(&self) -> Result<Vec<StoredSubmission>> {
        let _guard = self.inner.lock.lock().await;
        self.read_rows()
    }

    /// Stored rows for one round, ordered by submission time.
    pub async fn list_round(&self, round: u32) -> Result<Vec<StoredSubmission>> {
        let _guard = self.inner.lock.lock().await;
        let mut rows = self.read_rows()?;
        rows.retain(|row| row.round == round);
        Ok(rows)
    }

    /// Highest round number any stored submission belongs to.
    pub async fn latest_round(&self) -> Result<Option<u32>> {
        let _guard = self.inner.lock.lock().await;
        let rows = self.read_rows()?;
        Ok(rows.iter().map(|row| row.round).max())
    }

    /// Drop all stored submissions and re-create the empty file.
    pub async fn reset(&self) -> Result<()> {
        let _guard = self.inner.lock.lock().await;
        if self.inner.path.exists() {
            std::fs::remove_file(&self.inner.path)?;
        }
        self.init_file()
    }

    fn init_file(&self) -> Result<()> {
        if self.inner.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.inner.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(&self.inner.path)?;
        writer.write_record(HEADERS)?;
        writer.flush()?;
        Ok(())
    }

    fn read_rows(&self) -> Result<Vec<StoredSubmission>> {
        let mut reader = csv::Reader::from_path(&self.inner.path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            rows.push(record?);
        }
        rows.sort_by(|a: &StoredSubmission, b: &StoredSubmission| {
            a.submitted_at.cmp(&b.submitted_at)
        });
        Ok(rows)
    }
}
