//! Shell command execution.

use crate::error::{CreateError, Result};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How often a child with a deadline is polled for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it ran past its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timed_out(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: true,
        }
    }

    /// Convert an unsuccessful result into an error.
    ///
    /// Timeouts become [`CreateError::CommandTimedOut`], other failures
    /// [`CreateError::CommandFailed`] carrying the captured stderr.
    pub fn check(self, command: &str) -> Result<Self> {
        if self.timed_out {
            return Err(CreateError::CommandTimedOut {
                command: command.to_string(),
                seconds: self.duration.as_secs(),
            });
        }
        if !self.success {
            return Err(CreateError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
                stderr: self.stderr,
            });
        }
        Ok(self)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,

    /// Kill the command after this long (None = no timeout).
    pub timeout: Option<Duration>,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Set the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add an environment variable.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }
}

/// Output line from command execution.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Execute a shell command.
///
/// A non-zero exit or a timeout is reported through the returned
/// [`CommandResult`]; `Err` means the command could not be run at all.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = build_command(command, options);
    tracing::debug!(command, cwd = ?options.cwd, timeout = ?options.timeout, "Spawning command");

    let mut child = cmd.spawn().map_err(|e| CreateError::CommandFailed {
        command: command.to_string(),
        code: None,
        stderr: e.to_string(),
    })?;

    let rx = collect_output(&mut child);
    let deadline = options.timeout.map(|timeout| start + timeout);

    let Some(status) = wait_until(&mut child, deadline)? else {
        kill_process_tree(&mut child);
        // Readers may still be blocked on pipes held open by orphaned
        // grandchildren, so only take what already arrived.
        let (stdout, stderr) = gather(rx.try_iter());
        let duration = start.elapsed();
        tracing::debug!(command, ?duration, "Command timed out");
        return Ok(CommandResult::timed_out(stdout, stderr, duration));
    };

    let (stdout, stderr) = gather(rx.iter());
    let duration = start.elapsed();
    tracing::debug!(command, code = ?status.code(), ?duration, "Command finished");

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Quote a value for safe interpolation into a shell command line.
pub fn shell_quote(value: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

fn build_command(command: &str, options: &CommandOptions) -> Command {
    let shell = detect_shell();

    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag(&shell));
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        // Own process group, so a timeout can take down the whole tree.
        cmd.process_group(0);
    }

    cmd
}

/// Spawn one reader thread per piped stream, feeding a shared channel.
fn collect_output(child: &mut Child) -> Receiver<OutputLine> {
    let (tx, rx) = mpsc::channel();

    if let Some(stdout) = child.stdout.take() {
        spawn_reader(stdout, tx.clone(), OutputLine::Stdout);
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_reader(stderr, tx, OutputLine::Stderr);
    }

    rx
}

fn spawn_reader<R>(stream: R, tx: Sender<OutputLine>, wrap: fn(String) -> OutputLine)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines().map_while(std::result::Result::ok) {
            if tx.send(wrap(line)).is_err() {
                break;
            }
        }
    });
}

fn gather(lines: impl Iterator<Item = OutputLine>) -> (String, String) {
    let mut stdout = String::new();
    let mut stderr = String::new();
    for line in lines {
        let (buffer, text) = match line {
            OutputLine::Stdout(text) => (&mut stdout, text),
            OutputLine::Stderr(text) => (&mut stderr, text),
        };
        buffer.push_str(&text);
        buffer.push('\n');
    }
    (stdout, stderr)
}

/// Wait for the child, giving up at `deadline`. `Ok(None)` means it is
/// still running.
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> Result<Option<ExitStatus>> {
    let Some(deadline) = deadline else {
        return Ok(Some(child.wait()?));
    };

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill_process_tree(child: &mut Child) {
    #[cfg(unix)]
    if let Ok(pid) = i32::try_from(child.id()) {
        // SAFETY: kill(2) has no memory-safety preconditions; the child leads
        // its own process group, so -pid addresses exactly that group.
        unsafe {
            libc::kill(-pid, libc::SIGKILL);
        }
    }

    let _ = child.kill();
    let _ = child.wait();
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lc` (login, non-interactive) on Unix so that version managers
/// activated from the login profile (nvm, asdf, phpenv) put `node`, `php`
/// and friends on PATH. Interactive mode (`-i`) is avoided because without
/// a TTY it writes job-control warnings to stderr, which would pollute the
/// stderr-based requirement check.
fn shell_flag(_shell: &str) -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}
