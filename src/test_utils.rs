//! Test utilities and mock factories.
//!
//! Only compiled in test builds.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::desktop::{LauncherDescriptor, LauncherKind};
use crate::error::ParseError;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "deskapp-{}-{}-{}",
            label,
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Parse desktop entry text as if it were read from `test.desktop`.
pub fn parse_entry(content: &str) -> Result<LauncherDescriptor, ParseError> {
    crate::desktop::parser::from_str(Path::new("/tmp/test.desktop"), content)
}

/// Create a mock application descriptor with the given `Exec=`.
pub fn mock_application(exec: &str) -> LauncherDescriptor {
    LauncherDescriptor::new(LauncherKind::Application {
        exec: exec.to_string(),
        working_directory: None,
    })
}

/// Create a mock link descriptor.
pub fn mock_link(url: &str) -> LauncherDescriptor {
    LauncherDescriptor::new(LauncherKind::Link {
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_cleanup() {
        let path = {
            let dir = TempDir::new("utils");
            let file = dir.write("a/b.txt", "x");
            assert!(file.exists());
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_mock_application() {
        let app = mock_application("foo %f");
        assert_eq!(app.exec(), Some("foo %f"));
        assert!(app.id().is_none());
    }
}
