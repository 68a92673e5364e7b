use anyhow::Result;
use clap::{Parser, Subcommand};

use snapkeep::cli::{
    handle_dump_command, handle_export_command, handle_snapshot_command, DumpArgs, ExportArgs,
    SnapshotCommands,
};
use snapkeep::config::{SnapkeepPaths, Settings};

#[derive(Parser)]
#[command(
    name = "snapkeep",
    version,
    about = "Snapshot and backup lifecycle manager",
    long_about = "snapkeep creates ZFS snapshots and MySQL dumps whose names carry \
                  their own retention policy, ships them to a remote store, and \
                  purges both sides once artifacts expire."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot management commands
    #[command(subcommand, alias = "snap")]
    Snapshot(SnapshotCommands),

    /// Export snapshots to the remote store and purge expired artifacts
    Export(ExportArgs),

    /// Dump a MySQL database and ship it to the remote store
    Dump(DumpArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SnapkeepPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Snapshot(cmd)) => {
            handle_snapshot_command(cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&paths, &settings, args)?;
        }
        Some(Commands::Dump(args)) => {
            handle_dump_command(&paths, &settings, args)?;
        }
        Some(Commands::Config) => {
            println!("snapkeep Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Spool directory:  {}", settings.spool_dir(&paths).display());
            match &settings.remote_root {
                Some(root) => println!("Remote root:      {}", root.display()),
                None => println!("Remote root:      (not set)"),
            }
        }
        None => {
            println!("snapkeep - snapshot and backup lifecycle manager");
            println!();
            println!("Run 'snapkeep --help' for usage information.");
        }
    }

    Ok(())
}
