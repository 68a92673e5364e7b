//! Driver pipelines
//!
//! Each service wires the retention engine to the collaborators for one of
//! the tool's workflows. Inventories are listed once at the start of a run
//! and every diff/sweep decision is made against those snapshots of external
//! state; a collaborator failure aborts the remaining pipeline, since a
//! partial local/remote view would make the decisions unsafe.

pub mod dump;
pub mod export;
pub mod purge;
pub mod stats;

pub use dump::{DumpReport, DumpService};
pub use export::{ExportReport, ExportService};
pub use purge::{PurgeReport, PurgeService};
pub use stats::{SnapshotStat, StatsReport, StatsService};
