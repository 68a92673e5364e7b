//! Database dump CLI command
//!
//! Dumps a MySQL database into a retention-named artifact, ships it to the
//! remote destination folder, and purges expired dumps there.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::config::{SnapkeepPaths, Settings};
use crate::error::{SnapkeepError, SnapkeepResult};
use crate::exec::CommandRunner;
use crate::services::DumpService;
use crate::sources::{MysqlConnection, MysqlDumper};
use crate::store::DirStore;

use super::{parse_ttl, Ttl};

/// Dump command arguments
#[derive(Args)]
pub struct DumpArgs {
    /// MySQL database to dump
    #[arg(long)]
    pub database: String,

    /// MySQL database user
    #[arg(long = "db-user")]
    pub db_user: String,

    /// MySQL database password
    #[arg(long = "db-password", env = "SNAPKEEP_DB_PASSWORD")]
    pub db_password: Option<String>,

    /// MySQL database host
    #[arg(long = "db-host", default_value = "localhost")]
    pub db_host: String,

    /// How long to keep the dump, e.g. 36h, 30d, 6m, 1y
    #[arg(short, long, value_parser = parse_ttl)]
    pub ttl: Ttl,

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

/// Handle the dump command
pub fn handle_dump_command(
    paths: &SnapkeepPaths,
    settings: &Settings,
    args: DumpArgs,
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
    let dumper = MysqlDumper::new(
        runner,
        MysqlConnection {
            database: args.database,
            username: args.db_user,
            password: args.db_password,
            host: args.db_host,
        },
    );
    let store = DirStore::new(remote_root);
    let service = DumpService::new(&dumper, &store, spool_dir, args.safe);

    let report = service.run(args.ttl.amount, args.ttl.unit, Utc::now())?;
    println!("Done: {}", report.summary());

    Ok(())
}
