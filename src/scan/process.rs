//! Bounded execution of external commands.
//!
//! Every external invocation in a scan goes through [`run_command`]: version
//! queries, package-manager probes, all of it. The contract is that nothing
//! here ever blocks forever and nothing here ever panics or errors on a
//! misbehaving child — failures are encoded in the returned exit code and
//! stderr so callers can degrade per-item instead of aborting a scan.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

/// Exit code reported for a timed-out or unspawnable command, distinct from
/// any genuine exit status.
pub const TIMEOUT_EXIT_CODE: i32 = -1;

/// Marker prefixed to stderr when a command exceeded its timeout.
pub const TIMEOUT_MARKER: &str = "TimeoutExpired:";

/// Default bound for scan-time invocations that don't pick their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Captured output of one external command.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ProcessOutput {
    /// Whether the command ran to completion with exit code zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether the command was killed for exceeding its timeout.
    pub fn timed_out(&self) -> bool {
        self.exit_code == TIMEOUT_EXIT_CODE && self.stderr.starts_with(TIMEOUT_MARKER)
    }

    fn spawn_failure(error: std::io::Error) -> Self {
        Self {
            stdout: String::new(),
            stderr: error.to_string(),
            exit_code: TIMEOUT_EXIT_CODE,
        }
    }
}

/// Run `program` with `args`, capturing stdout/stderr, bounded by `timeout`.
///
/// A non-zero exit is a normal return, never an error. On timeout the child
/// is killed exactly once, any output already buffered in the pipes is
/// drained in a second pass, the exit code is [`TIMEOUT_EXIT_CODE`], and
/// stderr carries the [`TIMEOUT_MARKER`] followed by the drained stderr.
/// A spawn failure (e.g. the executable vanished between resolution and
/// invocation) is encoded the same way, minus the marker.
pub fn run_command(program: &Path, args: &[&str], timeout: Option<Duration>) -> ProcessOutput {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!("failed to spawn {}: {}", program.display(), e);
            return ProcessOutput::spawn_failure(e);
        }
    };

    let status = match timeout {
        Some(bound) => match child.wait_timeout(bound) {
            Ok(Some(status)) => Some(status),
            Ok(None) => {
                // Timed out: kill once, reap, then drain whatever made it
                // into the pipes before the kill.
                let _ = child.kill();
                let _ = child.wait();
                let (stdout, stderr) = drain(&mut child);
                tracing::debug!(
                    "{} exceeded timeout of {:?}, killed",
                    program.display(),
                    bound
                );
                return ProcessOutput {
                    stdout,
                    stderr: format!("{} {}", TIMEOUT_MARKER, stderr),
                    exit_code: TIMEOUT_EXIT_CODE,
                };
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return ProcessOutput::spawn_failure(e);
            }
        },
        None => child.wait().ok(),
    };

    let (stdout, stderr) = drain(&mut child);
    let exit_code = status
        .and_then(|s| s.code())
        .unwrap_or(TIMEOUT_EXIT_CODE);

    ProcessOutput {
        stdout,
        stderr,
        exit_code,
    }
}

/// Read whatever remains in the child's stdio pipes.
fn drain(child: &mut std::process::Child) -> (String, String) {
    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        let _ = out.read_to_string(&mut stdout);
    }
    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        let _ = err.read_to_string(&mut stderr);
    }
    (stdout, stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn sh() -> std::path::PathBuf {
        std::path::PathBuf::from("/bin/sh")
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_zero_exit() {
        let output = run_command(&sh(), &["-c", "echo hello"], Some(DEFAULT_TIMEOUT));
        assert!(output.success());
        assert_eq!(output.exit_code, 0);
        assert!(output.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_not_an_error() {
        let output = run_command(&sh(), &["-c", "exit 7"], Some(DEFAULT_TIMEOUT));
        assert!(!output.success());
        assert_eq!(output.exit_code, 7);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr() {
        let output = run_command(&sh(), &["-c", "echo oops >&2"], Some(DEFAULT_TIMEOUT));
        assert!(output.stderr.contains("oops"));
        assert!(!output.timed_out());
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_and_reports_marker() {
        let output = run_command(
            &sh(),
            &["-c", "echo partial; sleep 30"],
            Some(Duration::from_millis(200)),
        );
        assert_eq!(output.exit_code, TIMEOUT_EXIT_CODE);
        assert!(output.stderr.starts_with(TIMEOUT_MARKER));
        assert!(output.timed_out());
        // Output buffered before the kill is still drained.
        assert!(output.stdout.contains("partial"));
    }

    #[test]
    fn unspawnable_command_is_encoded_not_raised() {
        let output = run_command(
            Path::new("/nonexistent/binary/envaudit-test"),
            &[],
            Some(DEFAULT_TIMEOUT),
        );
        assert_eq!(output.exit_code, TIMEOUT_EXIT_CODE);
        assert!(!output.stderr.is_empty());
        assert!(!output.timed_out());
    }

    #[cfg(unix)]
    #[test]
    fn no_timeout_waits_for_completion() {
        let output = run_command(&sh(), &["-c", "sleep 0.05; echo done"], None);
        assert!(output.success());
        assert!(output.stdout.contains("done"));
    }
}
