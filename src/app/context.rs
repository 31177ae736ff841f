//! Launch contexts: where a launched application should appear and how
//! the desktop tracks its startup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::AppInfo;
use crate::desktop::Target;

/// Supplies per-launch environment for a child process.
///
/// Both values are optional; empty or missing values are not passed on.
pub trait LaunchContext {
    /// The X display the application should open on (`DISPLAY`).
    fn display(&self, app: &dyn AppInfo, targets: &[Target]) -> Option<String>;

    /// A startup notification id (`DESKTOP_STARTUP_ID`).
    fn startup_notify_id(&self, app: &dyn AppInfo, targets: &[Target]) -> Option<String>;
}

/// A context returning fixed values.
#[derive(Debug, Clone, Default)]
pub struct StaticLaunchContext {
    pub display: Option<String>,
    pub startup_notify_id: Option<String>,
}

impl LaunchContext for StaticLaunchContext {
    fn display(&self, _app: &dyn AppInfo, _targets: &[Target]) -> Option<String> {
        self.display.clone()
    }

    fn startup_notify_id(&self, _app: &dyn AppInfo, _targets: &[Target]) -> Option<String> {
        self.startup_notify_id.clone()
    }
}

/// A context for the current session.
///
/// Passes the caller's `DISPLAY` through and generates a fresh startup id
/// for entries with `StartupNotify=true`.
#[derive(Debug, Default)]
pub struct SessionLaunchContext {
    sequence: AtomicU64,
}

impl SessionLaunchContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LaunchContext for SessionLaunchContext {
    fn display(&self, _app: &dyn AppInfo, _targets: &[Target]) -> Option<String> {
        std::env::var("DISPLAY").ok().filter(|d| !d.is_empty())
    }

    fn startup_notify_id(&self, app: &dyn AppInfo, _targets: &[Target]) -> Option<String> {
        if !app.use_startup_notification() {
            return None;
        }

        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let app_name = app
            .id()
            .or(app.name())
            .unwrap_or("app")
            .replace(char::is_whitespace, "_");

        Some(format!(
            "deskapp-{}-{}-{}_TIME{}",
            std::process::id(),
            app_name,
            seq,
            time
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_application;

    #[test]
    fn test_static_context() {
        let ctx = StaticLaunchContext {
            display: Some(":1".to_string()),
            startup_notify_id: None,
        };
        let app = mock_application("foo");
        assert_eq!(ctx.display(&app, &[]), Some(":1".to_string()));
        assert_eq!(ctx.startup_notify_id(&app, &[]), None);
    }

    #[test]
    fn test_session_ids_only_with_startup_notify() {
        let ctx = SessionLaunchContext::new();
        let mut app = mock_application("foo");
        assert_eq!(ctx.startup_notify_id(&app, &[]), None);

        app.set_use_startup_notification(true);
        app.set_id(Some("my app.desktop".to_string()));
        let first = ctx.startup_notify_id(&app, &[]).unwrap();
        let second = ctx.startup_notify_id(&app, &[]).unwrap();

        assert!(first.contains("my_app.desktop"));
        assert!(first.contains("_TIME"));
        assert_ne!(first, second);
    }
}
