//! Export CLI command
//!
//! Ships local snapshots to the remote destination folder and purges
//! expired remote artifacts.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::config::{SnapkeepPaths, Settings};
use crate::error::{SnapkeepError, SnapkeepResult};
use crate::exec::CommandRunner;
use crate::services::ExportService;
use crate::sources::ZfsManager;
use crate::store::DirStore;

/// Export command arguments
#[derive(Args)]
pub struct ExportArgs {
    /// ZFS dataset to export
    #[arg(short, long)]
    pub dataset: String,

    /// Destination folder on the mounted remote (defaults to the configured
    /// remote_root)
    #[arg(short = 'f', long)]
    pub remote: Option<PathBuf>,

    /// Safe mode: print planned actions without executing them
    #[arg(short, long)]
    pub safe: bool,

    /// Output more information
    #[arg(short, long)]
    pub verbose: bool,
}

/// Handle the export command
pub fn handle_export_command(
    paths: &SnapkeepPaths,
    settings: &Settings,
    args: ExportArgs,
) -> SnapkeepResult<()> {
    let remote_root = args
        .remote
        .or_else(|| settings.remote_root.clone())
        .ok_or_else(|| {
            SnapkeepError::Config(
                "no destination folder configured; pass --remote or set remote_root".into(),
            )
        })?;

    paths.ensure_directories()?;
    let spool_dir = settings.spool_dir(paths);

    let runner = CommandRunner::new(args.safe, args.verbose);
    let zfs = ZfsManager::new(runner, false);
    let store = DirStore::new(remote_root);
    let service = ExportService::new(&zfs, &store, spool_dir, args.safe);

    let report = service.run(&args.dataset, Utc::now())?;
    println!("Done: {}", report.summary());

    Ok(())
}
