//! The launcher descriptor: one parsed `Application` or `Link` desktop entry.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::desktop::icon::{Icon, normalize_icon_name};

/// What the entry launches.
///
/// The command and the URL are mutually exclusive, so they live in the
/// variant rather than side by side on the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherKind {
    /// `Type=Application`: runs a command line.
    Application {
        /// `Exec=` template, possibly empty.
        exec: String,
        /// `Path=`: working directory for the child process.
        working_directory: Option<PathBuf>,
    },
    /// `Type=Link`: points at a URL.
    Link {
        /// `URL=` value, possibly empty.
        url: String,
    },
}

/// Desktop environments an entry is restricted to or hidden from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    /// No `OnlyShowIn` or `NotShowIn` key.
    #[default]
    All,
    /// `OnlyShowIn=`: shown only in these desktops.
    OnlyShowIn(Vec<String>),
    /// `NotShowIn=`: shown everywhere except these desktops.
    NotShowIn(Vec<String>),
}

impl Visibility {
    /// Whether an entry with this scope is shown in any of `desktops`.
    pub fn allows<S: AsRef<str>>(&self, desktops: &[S]) -> bool {
        let listed = |names: &[String]| {
            desktops
                .iter()
                .any(|desktop| names.iter().any(|name| name == desktop.as_ref()))
        };

        match self {
            Visibility::All => true,
            Visibility::OnlyShowIn(names) => listed(names),
            Visibility::NotShowIn(names) => !listed(names),
        }
    }
}

/// A parsed launcher definition.
///
/// Built by the constructors in [`crate::desktop::parser`]. Cloning gives
/// an independent copy whose strings can be changed without touching the
/// original; an already resolved icon is shared between the two.
#[derive(Debug, Clone)]
pub struct LauncherDescriptor {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) icon_name: Option<String>,
    pub(crate) icon: OnceLock<Option<Arc<Icon>>>,
    pub(crate) kind: LauncherKind,
    pub(crate) use_startup_notification: bool,
    pub(crate) use_terminal: bool,
    pub(crate) is_hidden: bool,
    pub(crate) no_display: bool,
    pub(crate) visibility: Visibility,
    pub(crate) source_path: Option<PathBuf>,
}

impl LauncherDescriptor {
    /// A descriptor of the given kind with every optional field unset.
    pub fn new(kind: LauncherKind) -> Self {
        Self {
            id: None,
            name: None,
            comment: None,
            icon_name: None,
            icon: OnceLock::new(),
            kind,
            use_startup_notification: false,
            use_terminal: false,
            is_hidden: false,
            no_display: false,
            visibility: Visibility::default(),
            source_path: None,
        }
    }

    /// An independent copy of this descriptor.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon_name.as_deref()
    }

    pub fn kind(&self) -> &LauncherKind {
        &self.kind
    }

    pub fn is_application(&self) -> bool {
        matches!(self.kind, LauncherKind::Application { .. })
    }

    /// The `Exec=` template of an application entry.
    pub fn exec(&self) -> Option<&str> {
        match &self.kind {
            LauncherKind::Application { exec, .. } => Some(exec),
            LauncherKind::Link { .. } => None,
        }
    }

    /// The `URL=` of a link entry.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            LauncherKind::Link { url } => Some(url),
            LauncherKind::Application { .. } => None,
        }
    }

    pub fn working_directory(&self) -> Option<&Path> {
        match &self.kind {
            LauncherKind::Application {
                working_directory, ..
            } => working_directory.as_deref(),
            LauncherKind::Link { .. } => None,
        }
    }

    pub fn use_startup_notification(&self) -> bool {
        self.use_startup_notification
    }

    pub fn use_terminal(&self) -> bool {
        self.use_terminal
    }

    /// `Hidden=true`: the entry counts as deleted.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn no_display(&self) -> bool {
        self.no_display
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// The file this entry was loaded from, when known.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The entry's icon, resolved from `icon_name` on first use.
    pub fn icon(&self) -> Option<Arc<Icon>> {
        self.icon
            .get_or_init(|| {
                self.icon_name
                    .as_deref()
                    .map(|name| Arc::new(Icon::from_name(name)))
            })
            .clone()
    }

    /// Whether the entry belongs in menus for any of `desktops`.
    ///
    /// Hidden and `NoDisplay` entries are never shown.
    pub fn should_show_in<S: AsRef<str>>(&self, desktops: &[S]) -> bool {
        !self.is_hidden && !self.no_display && self.visibility.allows(desktops)
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Replace the icon name. The value is normalized like a parsed
    /// `Icon=` key and the cached icon is dropped.
    pub fn set_icon_name(&mut self, icon_name: Option<&str>) {
        self.icon_name = icon_name
            .map(normalize_icon_name)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        self.icon = OnceLock::new();
    }

    /// Replace the command template. Ignored for link entries.
    pub fn set_exec(&mut self, new_exec: impl Into<String>) {
        if let LauncherKind::Application { exec, .. } = &mut self.kind {
            *exec = new_exec.into();
        }
    }

    /// Replace the working directory. Ignored for link entries.
    pub fn set_working_directory(&mut self, dir: Option<PathBuf>) {
        if let LauncherKind::Application {
            working_directory, ..
        } = &mut self.kind
        {
            *working_directory = dir;
        }
    }

    pub fn set_use_terminal(&mut self, use_terminal: bool) {
        self.use_terminal = use_terminal;
    }

    pub fn set_use_startup_notification(&mut self, use_startup_notification: bool) {
        self.use_startup_notification = use_startup_notification;
    }
}

/// Descriptors are the same application when their ids match.
///
/// Entries without an id are never equal to anything, themselves included.
impl PartialEq for LauncherDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(exec: &str) -> LauncherDescriptor {
        LauncherDescriptor::new(LauncherKind::Application {
            exec: exec.to_string(),
            working_directory: None,
        })
    }

    #[test]
    fn test_kind_accessors_are_exclusive() {
        let app = application("foo");
        assert_eq!(app.exec(), Some("foo"));
        assert_eq!(app.url(), None);

        let link = LauncherDescriptor::new(LauncherKind::Link {
            url: "http://example.com".to_string(),
        });
        assert_eq!(link.exec(), None);
        assert_eq!(link.url(), Some("http://example.com"));
        assert_eq!(link.working_directory(), None);
    }

    #[test]
    fn test_icon_absent_without_name() {
        assert!(application("foo").icon().is_none());
    }

    #[test]
    fn test_icon_is_cached_and_shared_by_copies() {
        let mut app = application("foo");
        app.set_icon_name(Some("firefox"));

        let first = app.icon().unwrap();
        let copy = app.duplicate();
        assert!(Arc::ptr_eq(&first, &app.icon().unwrap()));
        assert!(Arc::ptr_eq(&first, &copy.icon().unwrap()));
    }

    #[test]
    fn test_set_icon_name_resets_cache() {
        let mut app = application("foo");
        app.set_icon_name(Some("old.png"));
        assert_eq!(*app.icon().unwrap(), Icon::Themed("old".to_string()));

        app.set_icon_name(Some("/opt/app/icon.png"));
        assert_eq!(
            *app.icon().unwrap(),
            Icon::File(PathBuf::from("/opt/app/icon.png"))
        );
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = application("foo %f");
        original.set_name(Some("Foo".to_string()));

        let mut copy = original.duplicate();
        copy.set_name(Some("Bar".to_string()));
        copy.set_exec("bar");

        assert_eq!(original.name(), Some("Foo"));
        assert_eq!(original.exec(), Some("foo %f"));
        assert_eq!(copy.name(), Some("Bar"));
    }

    #[test]
    fn test_equality_by_id() {
        let mut a = application("a");
        let mut b = application("b");
        assert_ne!(a, b);

        a.set_id(Some("same.desktop".to_string()));
        b.set_id(Some("same.desktop".to_string()));
        assert_eq!(a, b);

        b.set_id(Some("other.desktop".to_string()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_visibility_only_show_in() {
        let scope = Visibility::OnlyShowIn(vec!["LXDE".to_string()]);
        assert!(scope.allows(&["LXDE"]));
        assert!(scope.allows(&["ubuntu", "LXDE"]));
        assert!(!scope.allows(&["GNOME"]));
        assert!(!scope.allows::<&str>(&[]));
    }

    #[test]
    fn test_visibility_not_show_in() {
        let scope = Visibility::NotShowIn(vec!["KDE".to_string()]);
        assert!(!scope.allows(&["KDE"]));
        assert!(scope.allows(&["XFCE"]));
        assert!(scope.allows::<&str>(&[]));
    }

    #[test]
    fn test_should_show_respects_hidden_flags() {
        let mut app = application("foo");
        assert!(app.should_show_in(&["GNOME"]));

        app.no_display = true;
        assert!(!app.should_show_in(&["GNOME"]));

        app.no_display = false;
        app.is_hidden = true;
        assert!(!app.should_show_in(&["GNOME"]));
    }
}
