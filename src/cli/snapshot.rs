//! Snapshot CLI commands
//!
//! Create, purge and inspect ZFS snapshots carrying a retention policy in
//! their name.

use chrono::Utc;
use clap::Subcommand;

use crate::display;
use crate::error::SnapkeepResult;
use crate::exec::CommandRunner;
use crate::services::{PurgeService, StatsService};
use crate::sources::ZfsManager;

use super::{parse_ttl, Ttl};

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Create a snapshot with an embedded retention policy
    Create {
        /// ZFS dataset to work on
        #[arg(short, long)]
        dataset: String,

        /// Base name of the snapshot
        #[arg(short, long)]
        name: String,

        /// How long to keep the snapshot, e.g. 36h, 30d, 6m, 1y
        #[arg(short, long, value_parser = parse_ttl)]
        ttl: Ttl,

        /// Create the snapshot recursively
        #[arg(short, long)]
        recursive: bool,

        /// Safe mode: print commands without executing them
        #[arg(short, long)]
        safe: bool,

        /// Output more information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Destroy expired snapshots
    Purge {
        /// ZFS dataset to work on
        #[arg(short, long)]
        dataset: String,

        /// Destroy snapshots recursively
        #[arg(short, long)]
        recursive: bool,

        /// Safe mode: print commands without executing them
        #[arg(short, long)]
        safe: bool,

        /// Output more information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show statistics about existing snapshots
    Stats {
        /// ZFS dataset to work on
        #[arg(short, long)]
        dataset: String,

        /// Show per-snapshot detail blocks, including skipped entries
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(cmd: SnapshotCommands) -> SnapkeepResult<()> {
    match cmd {
        SnapshotCommands::Create {
            dataset,
            name,
            ttl,
            recursive,
            safe,
            verbose,
        } => {
            let runner = CommandRunner::new(safe, verbose);
            let zfs = ZfsManager::new(runner, recursive);

            let snapshot = zfs.create_snapshot(&dataset, &name, ttl.amount, ttl.unit, Utc::now())?;
            println!("Created snapshot: {}", snapshot);
        }

        SnapshotCommands::Purge {
            dataset,
            recursive,
            safe,
            verbose,
        } => {
            println!("Looking for expired snapshots...");

            let runner = CommandRunner::new(safe, verbose);
            let zfs = ZfsManager::new(runner, recursive);
            let service = PurgeService::new(&zfs);

            let report = service.run(&dataset, Utc::now())?;
            println!("Done: {}", report.summary());
        }

        SnapshotCommands::Stats { dataset, verbose } => {
            let runner = CommandRunner::new(false, false);
            let zfs = ZfsManager::new(runner, false);
            let service = StatsService::new(&zfs);

            let report = service.gather(&dataset, Utc::now())?;
            if verbose {
                print!("{}", display::format_stats_details(&report));
            } else {
                print!("{}", display::format_stats_report(&report));
            }
        }
    }

    Ok(())
}
