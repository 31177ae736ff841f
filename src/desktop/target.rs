//! File and URI arguments passed to a launched application.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::warn;

const FILE_SCHEME: &str = "file://";

/// A file or URI handed to an application through `%f`, `%F`, `%u` or `%U`.
///
/// Every target has a URI form. Targets on the local filesystem also have
/// a path form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    path: Option<PathBuf>,
    uri: String,
}

impl Target {
    /// A local file. Relative paths are made absolute against the
    /// current directory.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let uri = path_to_uri(&path);
        Self {
            path: Some(path),
            uri,
        }
    }

    /// A URI. `file://` URIs also get a local path.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let path = uri_to_path(&uri);
        Self { path, uri }
    }

    /// A command-line argument: URIs are recognized by their `scheme://`
    /// prefix, everything else is a path.
    pub fn parse(arg: &str) -> Self {
        if has_scheme(arg) {
            Self::from_uri(arg)
        } else {
            Self::from_path(arg)
        }
    }

    /// The local filesystem path, if the target is local.
    pub fn local_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The URI form of the target.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The path form, or the URI for non-local targets.
    ///
    /// Paths that are not valid UTF-8 cannot go through a command line
    /// unchanged, so their (lossless) URI is used instead.
    pub fn path_or_uri(&self) -> Cow<'_, str> {
        match self.path.as_deref().map(Path::to_str) {
            Some(Some(path)) => Cow::Borrowed(path),
            Some(None) => {
                warn!("Path {:?} is not valid UTF-8, passing its URI", self.path);
                Cow::Borrowed(&self.uri)
            }
            None => Cow::Borrowed(&self.uri),
        }
    }
}

fn has_scheme(arg: &str) -> bool {
    match arg.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn path_to_uri(path: &Path) -> String {
    let encoded: Vec<String> = path
        .as_os_str()
        .as_bytes()
        .split(|b| *b == b'/')
        .map(|segment| urlencoding::encode_binary(segment).into_owned())
        .collect();
    format!("{}{}", FILE_SCHEME, encoded.join("/"))
}

fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix(FILE_SCHEME)?;
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);
    if !rest.starts_with('/') {
        return None;
    }
    let decoded = urlencoding::decode_binary(rest.as_bytes());
    Some(PathBuf::from(OsStr::from_bytes(&decoded)))
}
