use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::desktop::entry::LauncherDescriptor;
use crate::desktop::parser::from_file;

/// XDG application directories, highest priority first.
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(data_home) = std::env::var("XDG_DATA_HOME")
        && !data_home.is_empty()
    {
        dirs.push(PathBuf::from(data_home).join("applications"));
    } else if let Some(data_home) = dirs::data_local_dir() {
        dirs.push(data_home.join("applications"));
    }

    match std::env::var("XDG_DATA_DIRS") {
        Ok(xdg_dirs) if !xdg_dirs.is_empty() => {
            for dir in xdg_dirs.split(':').filter(|d| !d.is_empty()) {
                dirs.push(PathBuf::from(dir).join("applications"));
            }
        }
        _ => {
            dirs.push(PathBuf::from("/usr/local/share/applications"));
            dirs.push(PathBuf::from("/usr/share/applications"));
        }
    }

    dirs
}

/// Locate the file for a desktop id in `dirs`, first match wins.
///
/// Besides `<dir>/<id>`, every `-` in the id may stand for a subdirectory,
/// so `kde-konsole.desktop` may live at `kde/konsole.desktop` and
/// `org-gnome-app.desktop` at `org/gnome/app.desktop`.
pub fn find_desktop_file(desktop_id: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    if desktop_id.is_empty() || desktop_id.contains('/') {
        return None;
    }

    let found = dirs.iter().find_map(|dir| find_in_dir(dir, desktop_id));
    if found.is_none() {
        debug!("Desktop id {} not found in {:?}", desktop_id, dirs);
    }
    found
}

fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let direct = dir.join(name);
    if direct.is_file() {
        return Some(direct);
    }

    name.match_indices('-')
        .filter(|(i, _)| *i > 0)
        .find_map(|(i, _)| {
            let subdir = dir.join(&name[..i]);
            if subdir.is_dir() {
                find_in_dir(&subdir, &name[i + 1..])
            } else {
                None
            }
        })
}

/// Parse every desktop entry under `dirs`.
///
/// Ids follow the desktop id rules (subdirectories joined with `-`); an id
/// seen in an earlier directory shadows later ones. Unparseable files are
/// skipped. The result is sorted by name.
pub fn scan_applications(dirs: &[PathBuf]) -> Vec<LauncherDescriptor> {
    let mut entries: HashMap<String, Option<LauncherDescriptor>> = HashMap::new();

    for dir in dirs {
        scan_directory(dir, dir, &mut entries);
    }

    let mut result: Vec<LauncherDescriptor> = entries.into_values().flatten().collect();
    result.sort_by(|a, b| {
        let a = a.name().unwrap_or_default().to_lowercase();
        let b = b.name().unwrap_or_default().to_lowercase();
        a.cmp(&b)
    });
    info!("Found {} desktop entries", result.len());
    result
}

fn scan_directory(
    root: &Path,
    dir: &Path,
    entries: &mut HashMap<String, Option<LauncherDescriptor>>,
) {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in read_dir.flatten() {
        let path = entry.path();

        if path.is_dir() {
            scan_directory(root, &path, entries);
            continue;
        }

        if path.extension().is_none_or(|ext| ext != "desktop") {
            continue;
        }

        let Some(desktop_id) = desktop_id_for(root, &path) else {
            continue;
        };
        if entries.contains_key(&desktop_id) {
            continue;
        }

        // Failed parses still claim the id so lower priority dirs can't
        // resurrect an entry the user overrode.
        let parsed = match from_file(&path) {
            Ok(mut descriptor) => {
                descriptor.id = Some(desktop_id.clone());
                Some(descriptor)
            }
            Err(e) => {
                debug!("Skipping {:?}: {}", path, e);
                None
            }
        };
        entries.insert(desktop_id, parsed);
    }
}

fn desktop_id_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("-"))
}
