//! The application-info interface and its implementation for launcher
//! descriptors.
//!
//! Callers that only need to show or start applications should depend on
//! [`AppInfo`] rather than on [`LauncherDescriptor`].

mod context;

pub use context::{LaunchContext, SessionLaunchContext, StaticLaunchContext};

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::desktop::exec::{accepts_files, accepts_uris, build_command, split_command};
use crate::desktop::{Icon, LauncherDescriptor, LauncherKind, Target, current_desktops};
use crate::error::LaunchError;
use crate::process::DetachedProcess;

/// Something that can be listed in an "open with" menu and launched.
pub trait AppInfo: fmt::Debug {
    /// Stable identifier, such as `firefox.desktop`.
    fn id(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    fn display_name(&self) -> Option<&str> {
        self.name()
    }

    fn description(&self) -> Option<&str>;

    /// The program the application runs.
    fn executable(&self) -> Option<String>;

    /// The unexpanded command line.
    fn commandline(&self) -> Option<&str>;

    fn icon(&self) -> Option<Arc<Icon>>;

    fn use_startup_notification(&self) -> bool {
        false
    }

    /// Whether local files can be passed to [`AppInfo::launch`].
    fn supports_files(&self) -> bool;

    /// Whether URIs can be passed to [`AppInfo::launch`].
    fn supports_uris(&self) -> bool;

    /// Whether the application belongs in menus on the current desktop.
    fn should_show(&self) -> bool;

    /// Start the application on `targets` without waiting for it.
    fn launch(
        &self,
        targets: &[Target],
        ctx: Option<&dyn LaunchContext>,
    ) -> Result<(), LaunchError>;

    /// Like [`AppInfo::launch`], taking URIs.
    fn launch_uris(
        &self,
        uris: &[&str],
        ctx: Option<&dyn LaunchContext>,
    ) -> Result<(), LaunchError> {
        let targets: Vec<Target> = uris.iter().map(|uri| Target::from_uri(*uri)).collect();
        self.launch(&targets, ctx)
    }

    /// An independent copy.
    fn dup(&self) -> Box<dyn AppInfo>;
}

/// Whether `a` and `b` are the same application.
///
/// A missing side is never equal to anything. Otherwise the ids must both
/// be set and identical.
pub fn equal(a: Option<&dyn AppInfo>, b: Option<&dyn AppInfo>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => matches!((a.id(), b.id()), (Some(x), Some(y)) if x == y),
        _ => false,
    }
}

impl AppInfo for LauncherDescriptor {
    fn id(&self) -> Option<&str> {
        LauncherDescriptor::id(self)
    }

    fn name(&self) -> Option<&str> {
        LauncherDescriptor::name(self)
    }

    fn description(&self) -> Option<&str> {
        self.comment()
    }

    fn executable(&self) -> Option<String> {
        let exec = self.exec()?;
        split_command(exec).ok()?.into_iter().next()
    }

    fn commandline(&self) -> Option<&str> {
        self.exec()
    }

    fn icon(&self) -> Option<Arc<Icon>> {
        LauncherDescriptor::icon(self)
    }

    fn use_startup_notification(&self) -> bool {
        LauncherDescriptor::use_startup_notification(self)
    }

    fn supports_files(&self) -> bool {
        self.exec().is_some_and(accepts_files)
    }

    fn supports_uris(&self) -> bool {
        self.exec().is_some_and(accepts_uris)
    }

    fn should_show(&self) -> bool {
        self.should_show_in(&current_desktops())
    }

    fn launch(
        &self,
        targets: &[Target],
        ctx: Option<&dyn LaunchContext>,
    ) -> Result<(), LaunchError> {
        launch_with_terminal(self, targets, ctx, &crate::config::terminal_command())
    }

    fn dup(&self) -> Box<dyn AppInfo> {
        Box::new(self.duplicate())
    }
}

/// Launch `descriptor`, wrapping terminal entries with `terminal`.
pub fn launch_with_terminal(
    descriptor: &LauncherDescriptor,
    targets: &[Target],
    ctx: Option<&dyn LaunchContext>,
    terminal: &str,
) -> Result<(), LaunchError> {
    let working_directory = match descriptor.kind() {
        LauncherKind::Link { .. } if !targets.is_empty() => {
            return Err(LaunchError::TargetsNotAccepted);
        }
        LauncherKind::Link { .. } => {
            return Err(LaunchError::Unsupported("launching Link entries"));
        }
        LauncherKind::Application { exec, .. } if exec.is_empty() => {
            return Err(LaunchError::NotLaunchable);
        }
        LauncherKind::Application {
            working_directory, ..
        } => working_directory.as_deref(),
    };

    let cmd = build_command(descriptor, targets, terminal);
    debug!("Launch command: `{}`", cmd);
    let argv = split_command(&cmd)?;

    let mut process = DetachedProcess::from_argv(&argv)?.current_dir(working_directory);

    if let Some(ctx) = ctx {
        if let Some(display) = ctx.display(descriptor, targets).filter(|d| !d.is_empty()) {
            process = process.env("DISPLAY", display);
        }
        if let Some(sn_id) = ctx
            .startup_notify_id(descriptor, targets)
            .filter(|id| !id.is_empty())
        {
            process = process.env("DESKTOP_STARTUP_ID", sn_id);
        }
    }

    let pid = process.spawn()?;
    debug!("Launched pid {}", pid);
    Ok(())
}
