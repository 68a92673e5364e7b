//! Remote artifact store
//!
//! The destination side of the export pipeline. The engine only ever decides
//! *which* names to pass here: listing feeds the differ and the sweeper,
//! upload receives the transfer set, delete receives the expired decisions.
//!
//! Credentials and transport are out of scope: the shipped [`DirStore`]
//! works against a destination folder on a locally mounted remote
//! (NFS, SSHFS and the like).

pub mod dir;

pub use dir::DirStore;

use std::path::Path;

use crate::error::SnapkeepResult;

/// A destination folder holding exported artifacts
pub trait RemoteStore {
    /// Ordered raw names of the artifacts in the destination folder
    fn list(&self) -> SnapkeepResult<Vec<String>>;

    /// Upload a local file into the destination folder under its file name
    fn upload(&self, local: &Path) -> SnapkeepResult<()>;

    /// Delete a remote artifact by name
    fn delete(&self, name: &str) -> SnapkeepResult<()>;
}
