//! Local purge pipeline
//!
//! Sweeps a dataset's snapshot inventory and destroys the expired ones.
//! Snapshots whose names do not carry the retention convention are left
//! untouched.

use chrono::{DateTime, Utc};

use crate::error::SnapkeepResult;
use crate::retention::sweep;
use crate::sources::SnapshotSource;

/// Purge run outcome
#[derive(Debug, Default)]
pub struct PurgeReport {
    /// Snapshots destroyed as expired
    pub destroyed: Vec<String>,
    /// Size of the inventory at the start of the run
    pub examined: usize,
}

impl PurgeReport {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "examined {} snapshot(s), destroyed {}",
            self.examined,
            self.destroyed.len()
        )
    }
}

/// Runs the purge pipeline for one dataset
pub struct PurgeService<'a, S> {
    source: &'a S,
}

impl<'a, S: SnapshotSource> PurgeService<'a, S> {
    /// Create a new purge service
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Run the pipeline at the given instant
    pub fn run(&self, dataset: &str, now: DateTime<Utc>) -> SnapkeepResult<PurgeReport> {
        let inventory = self.source.list(dataset)?;

        let mut report = PurgeReport {
            examined: inventory.len(),
            ..Default::default()
        };

        for decision in sweep(&inventory, now) {
            if !decision.expired {
                continue;
            }

            println!("Destroying snapshot: {}", decision.name);
            self.source.destroy(&decision.name)?;
            report.destroyed.push(decision.name);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapkeepError;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::path::Path;

    struct FakeSource {
        snapshots: Vec<String>,
        destroyed: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(snapshots: &[&str]) -> Self {
            Self {
                snapshots: snapshots.iter().map(|s| s.to_string()).collect(),
                destroyed: RefCell::new(Vec::new()),
            }
        }
    }

    impl SnapshotSource for FakeSource {
        fn list(&self, _dataset: &str) -> SnapkeepResult<Vec<String>> {
            Ok(self.snapshots.clone())
        }

        fn export(&self, _snapshot: &str, _dest: &Path) -> SnapkeepResult<()> {
            Ok(())
        }

        fn destroy(&self, snapshot: &str) -> SnapkeepResult<()> {
            if snapshot.contains("locked") {
                return Err(SnapkeepError::Command("dataset is busy".into()));
            }
            self.destroyed.borrow_mut().push(snapshot.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_destroys_only_expired_snapshots() {
        let source = FakeSource::new(&[
            "tank@bk_20200101-0000_exp_30d",
            "tank@bk_20200225-0000_exp_30d",
            "tank@manual-snapshot",
        ]);
        let service = PurgeService::new(&source);
        let now = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();

        let report = service.run("tank", now).unwrap();

        assert_eq!(report.examined, 3);
        assert_eq!(report.destroyed, vec!["tank@bk_20200101-0000_exp_30d"]);
        assert_eq!(
            *source.destroyed.borrow(),
            vec!["tank@bk_20200101-0000_exp_30d".to_string()]
        );
    }

    #[test]
    fn test_unparseable_snapshot_is_never_destroyed() {
        let source = FakeSource::new(&["tank@manual-snapshot", "tank@bk_20200101-0000"]);
        let service = PurgeService::new(&source);
        let now = Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap();

        let report = service.run("tank", now).unwrap();
        assert!(report.destroyed.is_empty());
        assert!(source.destroyed.borrow().is_empty());
    }

    #[test]
    fn test_destroy_failure_aborts_run() {
        let source = FakeSource::new(&[
            "tank@locked_20200101-0000_exp_1d",
            "tank@bk_20200101-0000_exp_1d",
        ]);
        let service = PurgeService::new(&source);
        let now = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();

        assert!(service.run("tank", now).is_err());
        // The failing destroy aborted before the second snapshot
        assert!(source.destroyed.borrow().is_empty());
    }
}
