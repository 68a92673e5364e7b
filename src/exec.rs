//! External command execution
//!
//! Wraps `std::process::Command` with the two flags every snapkeep command
//! honors: safe mode (print the command instead of executing it) and
//! verbose output. Mutating commands go through [`CommandRunner::run`] or
//! [`CommandRunner::run_shell`]; read-only listings use
//! [`CommandRunner::query`], which executes even in safe mode so that a dry
//! run still operates on real inventories.

use std::process::Command;

use crate::error::{SnapkeepError, SnapkeepResult};

/// Runs external commands, honoring safe mode and verbosity
#[derive(Debug, Clone, Copy)]
pub struct CommandRunner {
    safe_mode: bool,
    verbose: bool,
}

impl CommandRunner {
    /// Create a new runner
    pub fn new(safe_mode: bool, verbose: bool) -> Self {
        Self { safe_mode, verbose }
    }

    /// Whether this runner is in safe mode
    pub fn safe_mode(&self) -> bool {
        self.safe_mode
    }

    /// Run a mutating command
    ///
    /// In safe mode the command line is printed and nothing is executed.
    pub fn run(&self, program: &str, args: &[&str]) -> SnapkeepResult<String> {
        let rendered = render(program, args);
        if self.safe_mode || self.verbose {
            println!("Executing command: {}", rendered);
        }
        if self.safe_mode {
            return Ok(String::new());
        }

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| SnapkeepError::Command(format!("{}: {}", rendered, e)))?;
        collect(rendered, output)
    }

    /// Run a mutating shell pipeline via `sh -c`
    ///
    /// Needed for commands with pipes or redirections, e.g.
    /// `zfs send tank@snap | gzip > /spool/file.gzip`.
    pub fn run_shell(&self, command: &str) -> SnapkeepResult<String> {
        if self.safe_mode || self.verbose {
            println!("Executing command: {}", command);
        }
        if self.safe_mode {
            return Ok(String::new());
        }

        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| SnapkeepError::Command(format!("{}: {}", command, e)))?;
        collect(command.to_string(), output)
    }

    /// Run a read-only command
    ///
    /// Always executes, even in safe mode: inventory listings must reflect
    /// real state for a dry run to report anything meaningful.
    pub fn query(&self, program: &str, args: &[&str]) -> SnapkeepResult<String> {
        let rendered = render(program, args);
        if self.verbose {
            println!("Executing command: {}", rendered);
        }

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| SnapkeepError::Command(format!("{}: {}", rendered, e)))?;
        collect(rendered, output)
    }
}

fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn collect(rendered: String, output: std::process::Output) -> SnapkeepResult<String> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SnapkeepError::Command(format!(
            "{} ({}): {}",
            rendered,
            output.status,
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_mode_skips_execution() {
        let runner = CommandRunner::new(true, false);

        // A command that would fail if executed
        let output = runner.run("false", &[]).unwrap();
        assert!(output.is_empty());

        let output = runner.run_shell("exit 1").unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_query_executes_in_safe_mode() {
        let runner = CommandRunner::new(true, false);

        let output = runner.query("echo", &["inventory"]).unwrap();
        assert_eq!(output.trim(), "inventory");
    }

    #[test]
    fn test_run_captures_stdout() {
        let runner = CommandRunner::new(false, false);

        let output = runner.run("echo", &["hello", "world"]).unwrap();
        assert_eq!(output.trim(), "hello world");
    }

    #[test]
    fn test_failing_command_is_an_error() {
        let runner = CommandRunner::new(false, false);

        let err = runner.run("false", &[]).unwrap_err();
        assert!(matches!(err, SnapkeepError::Command(_)));
    }

    #[test]
    fn test_shell_pipeline() {
        let runner = CommandRunner::new(false, false);

        let output = runner.run_shell("printf 'b\\na\\n' | sort").unwrap();
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let runner = CommandRunner::new(false, false);

        let err = runner.query("snapkeep-no-such-binary", &[]).unwrap_err();
        assert!(matches!(err, SnapkeepError::Command(_)));
    }
}
