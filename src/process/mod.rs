//! Process execution utilities for launching detached applications.
//!
//! Spawned processes run in their own session (`setsid()`) so they outlive
//! the caller. A background thread reaps each child so no zombies pile up.

use crate::error::ProcessError;
use std::ffi::OsStr;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Builder for creating detached processes.
///
/// The program is resolved through `$PATH`. Environment overrides apply to
/// the child only; the caller's environment is never modified.
///
/// # Example
/// ```ignore
/// use deskapp::process::DetachedProcess;
///
/// DetachedProcess::from_argv(["xdg-open", "https://example.com"])?
///     .env("DESKTOP_STARTUP_ID", "launch-1")
///     .spawn()?;
/// ```
pub struct DetachedProcess {
    command: Command,
}

impl DetachedProcess {
    /// Create a new detached process builder for the given program.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            command: Command::new(program),
        }
    }

    /// Create a builder from an argument vector, `argv[0]` being the program.
    pub fn from_argv<I, S>(argv: I) -> Result<Self, ProcessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().ok_or(ProcessError::EmptyCommand)?;
        if program.as_ref().is_empty() {
            return Err(ProcessError::EmptyCommand);
        }
        Ok(Self::new(program).args(argv))
    }

    /// Add multiple arguments to the process.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.command.args(args);
        self
    }

    /// Set an environment variable for the child only.
    pub fn env<K: AsRef<OsStr>, V: AsRef<OsStr>>(mut self, key: K, value: V) -> Self {
        self.command.env(key, value);
        self
    }

    /// Run the child in `dir` instead of the inherited working directory.
    pub fn current_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.command.current_dir(dir);
        }
        self
    }

    /// Spawn the detached process without waiting for it.
    ///
    /// The spawned process:
    /// - Runs in a new session (calls `setsid()`)
    /// - Has stdin/stdout/stderr redirected to /dev/null
    /// - Survives when the parent process exits
    /// - Is reaped by a waiter thread once it exits
    ///
    /// Returns the child's process id.
    pub fn spawn(mut self) -> Result<u32, ProcessError> {
        self.command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // SAFETY: setsid() is async-signal-safe and creates a new session,
        // detaching the child from the parent's process group so it survives
        // when the caller exits.
        unsafe {
            self.command.pre_exec(|| {
                libc::setsid();
                Ok(())
            });
        }

        let mut child = self.command.spawn().map_err(ProcessError::SpawnFailed)?;
        let pid = child.id();

        let reaper = std::thread::Builder::new()
            .name(format!("reap-{}", pid))
            .spawn(move || {
                if let Err(e) = child.wait() {
                    tracing::warn!("Failed to reap child {}: {}", pid, e);
                }
            });
        if let Err(e) = reaper {
            tracing::warn!("Failed to start reaper for child {}: {}", pid, e);
        }

        Ok(pid)
    }
}
