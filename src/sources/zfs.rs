//! ZFS snapshot source
//!
//! Wraps the `zfs` command-line tool: listing snapshots of a dataset,
//! creating snapshots named through the identifier codec, destroying them,
//! and exporting them as gzip streams.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::SnapkeepResult;
use crate::exec::CommandRunner;
use crate::retention::{encode, ExpiryUnit};

use super::SnapshotSource;

/// Manages ZFS snapshots for one run
pub struct ZfsManager {
    runner: CommandRunner,
    /// Apply `-r` to snapshot create/destroy
    recursive: bool,
}

impl ZfsManager {
    /// Create a new ZfsManager
    pub fn new(runner: CommandRunner, recursive: bool) -> Self {
        Self { runner, recursive }
    }

    /// Create a snapshot of `dataset` named through the codec
    ///
    /// The snapshot suffix is `<base_name>_<YYYYMMDD-HHMM>_exp_<ttl>`, so the
    /// retention policy travels with the snapshot itself. Returns the full
    /// snapshot name.
    pub fn create_snapshot(
        &self,
        dataset: &str,
        base_name: &str,
        amount: u32,
        unit: ExpiryUnit,
        now: DateTime<Utc>,
    ) -> SnapkeepResult<String> {
        let snapshot = format!("{}@{}", dataset, encode(base_name, now, amount, unit));

        let mut args = vec!["snapshot"];
        if self.recursive {
            args.push("-r");
        }
        args.push(&snapshot);
        self.runner.run("zfs", &args)?;

        Ok(snapshot)
    }
}

impl SnapshotSource for ZfsManager {
    /// List snapshots whose name contains the dataset, sorted
    ///
    /// Uses a single `zfs list` invocation; filtering and sorting happen
    /// in-process. Listing executes even in safe mode.
    fn list(&self, dataset: &str) -> SnapkeepResult<Vec<String>> {
        let output = self
            .runner
            .query("zfs", &["list", "-H", "-o", "name", "-t", "snapshot"])?;

        let mut names: Vec<String> = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.contains(dataset))
            .map(str::to_string)
            .collect();
        names.sort();

        Ok(names)
    }

    fn export(&self, snapshot: &str, dest: &Path) -> SnapkeepResult<()> {
        self.runner
            .run_shell(&format!("zfs send {} | gzip > {}", snapshot, dest.display()))?;
        Ok(())
    }

    fn destroy(&self, snapshot: &str) -> SnapkeepResult<()> {
        let mut args = vec!["destroy"];
        if self.recursive {
            args.push("-r");
        }
        args.push(snapshot);
        self.runner.run("zfs", &args)?;
        Ok(())
    }
}
