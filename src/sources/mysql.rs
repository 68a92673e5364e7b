//! MySQL dump source
//!
//! Produces database dump artifacts via `mysqldump`. The dump filename is
//! built by the caller through the identifier codec so the retention policy
//! is encoded in the artifact name, exactly as for snapshots.

use std::path::Path;

use crate::error::SnapkeepResult;
use crate::exec::CommandRunner;

use super::DatabaseDumper;

/// Connection options for `mysqldump`
#[derive(Debug, Clone)]
pub struct MysqlConnection {
    /// Database to dump
    pub database: String,
    /// Database user
    pub username: String,
    /// Database password, omitted from the command line when not set
    pub password: Option<String>,
    /// Database host
    pub host: String,
}

/// Dumps a MySQL database through `mysqldump`
pub struct MysqlDumper {
    runner: CommandRunner,
    connection: MysqlConnection,
}

impl MysqlDumper {
    /// Create a new MysqlDumper
    pub fn new(runner: CommandRunner, connection: MysqlConnection) -> Self {
        Self { runner, connection }
    }
}

impl DatabaseDumper for MysqlDumper {
    fn database(&self) -> &str {
        &self.connection.database
    }

    fn dump(&self, dest: &Path) -> SnapkeepResult<()> {
        let conn = &self.connection;

        let mut command = format!("mysqldump --user={}", conn.username);
        if let Some(password) = &conn.password {
            command.push_str(&format!(" --password={}", password));
        }
        command.push_str(&format!(
            " --host={} {} > {}",
            conn.host,
            conn.database,
            dest.display()
        ));

        self.runner.run_shell(&command)?;
        Ok(())
    }
}
