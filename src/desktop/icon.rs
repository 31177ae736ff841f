//! Icons referenced by desktop entries.
//!
//! An `Icon=` value is either a name looked up in the icon theme or an
//! absolute path to an image file.

use std::path::{Path, PathBuf};

/// Image suffixes stripped from themed icon names.
const IMAGE_SUFFIXES: [&str; 3] = ["png", "svg", "xpm"];

/// Preferred pixel size when resolving themed icons to files.
pub const DEFAULT_ICON_SIZE: u16 = 48;

/// A resolved icon reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// An icon name to look up in the current icon theme.
    Themed(String),
    /// An image file on disk.
    File(PathBuf),
}

impl Icon {
    /// Build an icon from a normalized `Icon=` value.
    pub fn from_name(icon_name: &str) -> Self {
        if Path::new(icon_name).is_absolute() {
            Icon::File(PathBuf::from(icon_name))
        } else {
            Icon::Themed(icon_name.to_string())
        }
    }

    /// Find an image file for this icon.
    ///
    /// Themed icons are looked up in `theme` first (when given), then in
    /// hicolor, then without a theme. File icons resolve to themselves
    /// when the file exists.
    pub fn lookup(&self, size: u16, theme: Option<&str>) -> Option<PathBuf> {
        match self {
            Icon::File(path) => path.exists().then(|| path.clone()),
            Icon::Themed(name) => {
                if let Some(theme) = theme {
                    let icon = freedesktop_icons::lookup(name)
                        .with_size(size)
                        .with_theme(theme)
                        .find();
                    if icon.is_some() {
                        return icon;
                    }
                }

                let icon = freedesktop_icons::lookup(name)
                    .with_size(size)
                    .with_theme("hicolor")
                    .find();
                if icon.is_some() {
                    return icon;
                }

                freedesktop_icons::lookup(name).with_size(size).find()
            }
        }
    }
}

/// Strip a trailing image extension from a themed icon name.
///
/// Absolute paths are left alone. The comparison is case-sensitive, so
/// `app.PNG` stays as it is.
pub fn normalize_icon_name(icon_name: &str) -> &str {
    if icon_name.starts_with('/') {
        return icon_name;
    }

    match icon_name.rsplit_once('.') {
        Some((stem, suffix)) if IMAGE_SUFFIXES.contains(&suffix) => stem,
        _ => icon_name,
    }
}
