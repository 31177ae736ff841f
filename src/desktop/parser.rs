//! Building launcher descriptors from desktop entry documents.
//!
//! All constructors end in [`from_keyfile`], which owns the field rules.

use std::path::{Path, PathBuf};

use freedesktop_desktop_entry::DesktopEntry as FdEntry;
use tracing::debug;

use crate::desktop::entry::{LauncherDescriptor, LauncherKind, Visibility};
use crate::desktop::icon::normalize_icon_name;
use crate::desktop::scanner::{application_dirs, find_desktop_file};
use crate::error::ParseError;

/// Load the entry with the given desktop id (e.g. `firefox.desktop`) from
/// the XDG application directories.
pub fn from_id(desktop_id: &str) -> Result<LauncherDescriptor, ParseError> {
    from_id_in(desktop_id, &application_dirs())
}

/// Like [`from_id`], searching `dirs` in order.
pub fn from_id_in(desktop_id: &str, dirs: &[PathBuf]) -> Result<LauncherDescriptor, ParseError> {
    let path = find_desktop_file(desktop_id, dirs)
        .ok_or_else(|| ParseError::NotFound(desktop_id.to_string()))?;
    let mut descriptor = from_file(&path)?;
    descriptor.id = Some(desktop_id.to_string());
    Ok(descriptor)
}

/// Load an entry from an explicit file path.
pub fn from_file(path: &Path) -> Result<LauncherDescriptor, ParseError> {
    let content = std::fs::read_to_string(path).map_err(ParseError::Read)?;
    from_str(path, &content)
}

/// Decode raw desktop entry text. `path` is recorded as the entry's source.
pub fn from_str(path: &Path, content: &str) -> Result<LauncherDescriptor, ParseError> {
    let fd_entry = FdEntry::from_str(path, content, None::<&[&str]>)
        .map_err(|e| ParseError::Decode(e.to_string()))?;
    let mut descriptor = from_keyfile(&fd_entry)?;
    descriptor.source_path = Some(path.to_path_buf());
    Ok(descriptor)
}

/// Build a descriptor from an already decoded desktop entry.
///
/// Fails unless `Type` is `Application` or `Link`.
pub fn from_keyfile(fd_entry: &FdEntry) -> Result<LauncherDescriptor, ParseError> {
    let kind = match fd_entry.desktop_entry("Type") {
        Some("Application") => LauncherKind::Application {
            exec: unescape_value(fd_entry.desktop_entry("Exec").unwrap_or_default()),
            working_directory: fd_entry
                .desktop_entry("Path")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        },
        Some("Link") => LauncherKind::Link {
            url: fd_entry.desktop_entry("URL").unwrap_or_default().to_string(),
        },
        Some(other) => return Err(ParseError::UnsupportedType(other.to_string())),
        None => return Err(ParseError::MissingType),
    };

    let locales = freedesktop_desktop_entry::get_languages_from_env();

    let mut descriptor = LauncherDescriptor::new(kind);
    descriptor.name = fd_entry.name(&locales).map(|s| s.to_string());
    descriptor.comment = fd_entry.comment(&locales).map(|s| s.to_string());
    descriptor.icon_name = fd_entry
        .desktop_entry_localized("Icon", &locales)
        .map(|s| normalize_icon_name(&s).to_string())
        .filter(|name| !name.is_empty());
    descriptor.use_startup_notification = read_bool(fd_entry, "StartupNotify");
    descriptor.use_terminal = read_bool(fd_entry, "Terminal");
    descriptor.is_hidden = read_bool(fd_entry, "Hidden");
    descriptor.no_display = read_bool(fd_entry, "NoDisplay");
    descriptor.visibility = read_visibility(fd_entry);

    debug!(
        "Parsed desktop entry {:?} ({:?})",
        descriptor.name,
        descriptor.kind
    );

    Ok(descriptor)
}

/// Decode the string escapes of a desktop entry value (`\s`, `\n`, `\t`,
/// `\r`, `\\`). Other backslashes are kept as written.
///
/// The decoder leaves `Exec` raw, so this runs before the value is treated
/// as a command line.
fn unescape_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn read_bool(fd_entry: &FdEntry, key: &str) -> bool {
    matches!(fd_entry.desktop_entry(key).map(str::trim), Some("true" | "1"))
}

fn read_list(fd_entry: &FdEntry, key: &str) -> Option<Vec<String>> {
    fd_entry.desktop_entry(key).map(|value| {
        value
            .split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// `OnlyShowIn` wins over `NotShowIn` when both are present.
fn read_visibility(fd_entry: &FdEntry) -> Visibility {
    if let Some(only) = read_list(fd_entry, "OnlyShowIn") {
        Visibility::OnlyShowIn(only)
    } else if let Some(not) = read_list(fd_entry, "NotShowIn") {
        Visibility::NotShowIn(not)
    } else {
        Visibility::All
    }
}
