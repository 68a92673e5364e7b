//! Export pipeline
//!
//! Ships local snapshots to the remote store and purges expired remote
//! artifacts: list both sides, diff to find snapshots missing remotely,
//! export and upload each one through the spool directory, then sweep the
//! remote inventory and delete what is expired.
//!
//! Purge decisions are made against the remote listing taken at the start
//! of the run, so an artifact uploaded by this run can never be classified
//! for deletion by the same run.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{SnapkeepError, SnapkeepResult};
use crate::retention::{diff, local_base_name, sweep};
use crate::sources::SnapshotSource;
use crate::store::RemoteStore;

/// Export run outcome
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Local snapshots that were exported and uploaded
    pub uploaded: Vec<String>,
    /// Remote artifacts deleted as expired
    pub purged: Vec<String>,
    /// Size of the local inventory at the start of the run
    pub local_count: usize,
    /// Size of the remote inventory at the start of the run
    pub remote_count: usize,
}

impl ExportReport {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} local, {} remote: uploaded {}, purged {}",
            self.local_count,
            self.remote_count,
            self.uploaded.len(),
            self.purged.len()
        )
    }
}

/// Runs the export pipeline for one dataset
pub struct ExportService<'a, S, R> {
    source: &'a S,
    store: &'a R,
    spool_dir: PathBuf,
    safe_mode: bool,
}

impl<'a, S: SnapshotSource, R: RemoteStore> ExportService<'a, S, R> {
    /// Create a new export service
    pub fn new(source: &'a S, store: &'a R, spool_dir: PathBuf, safe_mode: bool) -> Self {
        Self {
            source,
            store,
            spool_dir,
            safe_mode,
        }
    }

    /// Run the pipeline at the given instant
    pub fn run(&self, dataset: &str, now: DateTime<Utc>) -> SnapkeepResult<ExportReport> {
        let local = self.source.list(dataset)?;
        let remote = self.store.list()?;

        let mut report = ExportReport {
            local_count: local.len(),
            remote_count: remote.len(),
            ..Default::default()
        };

        for snapshot in diff(&local, &remote) {
            let spool_path = self
                .spool_dir
                .join(format!("{}.gzip", local_base_name(&snapshot)));

            println!("Exporting snapshot: {}", snapshot);
            self.source.export(&snapshot, &spool_path)?;

            if self.safe_mode {
                println!("Would upload: {}", spool_path.display());
            } else {
                println!("Uploading: {}", spool_path.display());
                self.store.upload(&spool_path)?;
                fs::remove_file(&spool_path).map_err(|e| {
                    SnapkeepError::Io(format!(
                        "Failed to remove spool file {}: {}",
                        spool_path.display(),
                        e
                    ))
                })?;
            }

            report.uploaded.push(snapshot);
        }

        for decision in sweep(&remote, now) {
            if !decision.expired {
                continue;
            }

            if self.safe_mode {
                println!("Would delete remote artifact: {}", decision.name);
            } else {
                println!("Deleting remote artifact: {}", decision.name);
                self.store.delete(&decision.name)?;
            }

            report.purged.push(decision.name);
        }

        Ok(report)
    }
}
