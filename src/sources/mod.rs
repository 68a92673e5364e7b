//! Artifact sources
//!
//! The engine never touches external state itself; these traits define the
//! collaborator boundary it is driven through. `ZfsManager` and
//! `MysqlDumper` are the shipped implementations, both shelling out to the
//! respective tools through [`crate::exec::CommandRunner`].

pub mod mysql;
pub mod zfs;

pub use mysql::{MysqlConnection, MysqlDumper};
pub use zfs::ZfsManager;

use std::path::Path;

use crate::error::SnapkeepResult;

/// A source of local snapshot artifacts
pub trait SnapshotSource {
    /// Ordered raw names of the snapshots belonging to a dataset
    fn list(&self, dataset: &str) -> SnapkeepResult<Vec<String>>;

    /// Export a snapshot to a compressed file at `dest`
    fn export(&self, snapshot: &str, dest: &Path) -> SnapkeepResult<()>;

    /// Destroy a snapshot
    fn destroy(&self, snapshot: &str) -> SnapkeepResult<()>;
}

/// A source of database dump artifacts
pub trait DatabaseDumper {
    /// The database name, used as the artifact base name
    fn database(&self) -> &str;

    /// Write a dump of the database to `dest`
    fn dump(&self, dest: &Path) -> SnapkeepResult<()>;
}
