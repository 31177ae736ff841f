pub mod entry;
pub mod env;
pub mod exec;
pub mod icon;
pub mod parser;
pub mod scanner;
pub mod target;

pub use entry::{LauncherDescriptor, LauncherKind, Visibility};
pub use env::{current_desktops, set_desktop_env};
pub use exec::build_command;
pub use icon::Icon;
pub use parser::{from_file, from_id, from_keyfile};
pub use scanner::{application_dirs, scan_applications};
pub use target::Target;
