//! Database dump pipeline
//!
//! Creates a dump artifact named through the identifier codec, uploads it
//! to the remote store, then sweeps the remote inventory and deletes
//! expired dumps.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::{SnapkeepError, SnapkeepResult};
use crate::retention::{encode, sweep, ExpiryUnit};
use crate::sources::DatabaseDumper;
use crate::store::RemoteStore;

/// Dump run outcome
#[derive(Debug, Default)]
pub struct DumpReport {
    /// Name of the dump artifact that was created and uploaded
    pub artifact: String,
    /// Remote artifacts deleted as expired
    pub purged: Vec<String>,
}

impl DumpReport {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!("uploaded {}, purged {}", self.artifact, self.purged.len())
    }
}

/// Runs the dump pipeline for one database
pub struct DumpService<'a, D, R> {
    dumper: &'a D,
    store: &'a R,
    spool_dir: PathBuf,
    safe_mode: bool,
}

impl<'a, D: DatabaseDumper, R: RemoteStore> DumpService<'a, D, R> {
    /// Create a new dump service
    pub fn new(dumper: &'a D, store: &'a R, spool_dir: PathBuf, safe_mode: bool) -> Self {
        Self {
            dumper,
            store,
            spool_dir,
            safe_mode,
        }
    }

    /// Run the pipeline at the given instant
    pub fn run(&self, amount: u32, unit: ExpiryUnit, now: DateTime<Utc>) -> SnapkeepResult<DumpReport> {
        let artifact = format!("{}.sql", encode(self.dumper.database(), now, amount, unit));
        let spool_path = self.spool_dir.join(&artifact);

        println!("Creating dump: {}", artifact);
        self.dumper.dump(&spool_path)?;

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

        let mut report = DumpReport {
            artifact,
            ..Default::default()
        };

        // Listed after the upload: the fresh dump appears in the inventory
        // but is far from its threshold by construction.
        let remote = self.store.list()?;
        for decision in sweep(&remote, now) {
            if !decision.expired {
                continue;
            }

            if self.safe_mode {
                println!("Would delete remote dump: {}", decision.name);
            } else {
                println!("Deleting remote dump: {}", decision.name);
                self.store.delete(&decision.name)?;
            }

            report.purged.push(decision.name);
        }

        Ok(report)
    }
}
