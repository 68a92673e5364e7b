//! Snapshot statistics
//!
//! Evaluates every parseable snapshot of a dataset and reports its age
//! against its expiry threshold. Pure reporting: nothing is created or
//! destroyed here.

use chrono::{DateTime, Utc};

use crate::error::SnapkeepResult;
use crate::retention::{evaluate, parse, AgeReport, ArtifactIdentifier};
use crate::sources::SnapshotSource;

/// Age evaluation for one snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStat {
    /// Raw snapshot name
    pub name: String,
    /// Parsed identifier
    pub identifier: ArtifactIdentifier,
    /// Age against the expiry threshold
    pub age: AgeReport,
}

/// Stats run outcome
#[derive(Debug, Default)]
pub struct StatsReport {
    /// Evaluations for the parseable snapshots, in inventory order
    pub entries: Vec<SnapshotStat>,
    /// Inventory entries that did not parse and were skipped
    pub skipped: Vec<String>,
}

impl StatsReport {
    /// Number of expired snapshots
    pub fn expired_count(&self) -> usize {
        self.entries.iter().filter(|s| s.age.is_expired()).count()
    }
}

/// Gathers snapshot statistics for one dataset
pub struct StatsService<'a, S> {
    source: &'a S,
}

impl<'a, S: SnapshotSource> StatsService<'a, S> {
    /// Create a new stats service
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Evaluate the dataset's inventory at the given instant
    pub fn gather(&self, dataset: &str, now: DateTime<Utc>) -> SnapkeepResult<StatsReport> {
        let inventory = self.source.list(dataset)?;

        let mut report = StatsReport::default();
        for name in inventory {
            match parse(&name) {
                Ok(identifier) => {
                    let age = evaluate(&identifier, now);
                    report.entries.push(SnapshotStat {
                        name,
                        identifier,
                        age,
                    });
                }
                Err(_) => report.skipped.push(name),
            }
        }

        Ok(report)
    }
}
