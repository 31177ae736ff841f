use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::app::{AppInfo, SessionLaunchContext};
use crate::config;
use crate::desktop::icon::DEFAULT_ICON_SIZE;
use crate::desktop::{self, LauncherDescriptor, LauncherKind, Target, Visibility};

#[derive(Parser)]
#[command(name = "deskapp")]
#[command(about = "Inspect and launch freedesktop.org desktop entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the fields of a desktop entry
    Show {
        /// Desktop id (e.g. firefox.desktop) or path to a .desktop file
        entry: String,
    },
    /// Print the command line an entry would run for the given targets
    Command {
        /// Desktop id or path to a .desktop file
        entry: String,
        /// Files or URIs to pass to the application
        targets: Vec<String>,
    },
    /// Launch an entry with the given targets
    Launch {
        /// Desktop id or path to a .desktop file
        entry: String,
        /// Files or URIs to pass to the application
        targets: Vec<String>,
    },
    /// List installed applications
    List {
        /// Include entries hidden on the current desktop
        #[arg(long)]
        all: bool,
    },
}

/// Resolve a command-line entry argument.
///
/// Anything that looks like a path is read as a file, everything else is
/// treated as a desktop id.
pub fn load_entry(entry: &str) -> Result<LauncherDescriptor> {
    let looks_like_path = entry.contains('/') || Path::new(entry).is_file();
    let descriptor = if looks_like_path {
        desktop::from_file(Path::new(entry))
    } else {
        desktop::from_id(entry)
    };
    descriptor.with_context(|| format!("Failed to load desktop entry '{}'", entry))
}

fn parse_targets(targets: &[String]) -> Vec<Target> {
    targets.iter().map(|t| Target::parse(t)).collect()
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show { entry } => {
            let descriptor = load_entry(&entry)?;
            print!("{}", describe(&descriptor));
        }
        Commands::Command { entry, targets } => {
            let descriptor = load_entry(&entry)?;
            let cmd = desktop::build_command(
                &descriptor,
                &parse_targets(&targets),
                &config::terminal_command(),
            );
            println!("{}", cmd);
        }
        Commands::Launch { entry, targets } => {
            let descriptor = load_entry(&entry)?;
            let ctx = SessionLaunchContext::new();
            descriptor
                .launch(&parse_targets(&targets), Some(&ctx))
                .with_context(|| format!("Failed to launch '{}'", entry))?;
        }
        Commands::List { all } => {
            for descriptor in desktop::scan_applications(&desktop::application_dirs()) {
                if !all && !descriptor.should_show() {
                    continue;
                }
                println!(
                    "{}\t{}",
                    descriptor.id().unwrap_or_default(),
                    descriptor.name().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}

/// Human-readable field listing used by `deskapp show`.
pub fn describe(descriptor: &LauncherDescriptor) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: &str| {
        out.push_str(&format!("{:<16}{}\n", format!("{}:", key), value));
    };

    let kind = match descriptor.kind() {
        LauncherKind::Application { .. } => "Application",
        LauncherKind::Link { .. } => "Link",
    };
    line("Type", kind);
    line("Id", descriptor.id().unwrap_or("-"));
    line("Name", descriptor.name().unwrap_or("-"));
    line("Comment", descriptor.comment().unwrap_or("-"));
    line("Icon", descriptor.icon_name().unwrap_or("-"));

    if let Some(icon) = descriptor.icon() {
        let theme = config::config().icon_theme;
        let resolved = icon
            .lookup(DEFAULT_ICON_SIZE, theme.as_deref())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "not found".to_string());
        line("Icon file", &resolved);
    }

    match descriptor.kind() {
        LauncherKind::Application {
            exec,
            working_directory,
        } => {
            line("Exec", exec);
            if let Some(dir) = working_directory {
                line("Path", &dir.display().to_string());
            }
        }
        LauncherKind::Link { url } => line("URL", url),
    }

    line("Terminal", &descriptor.use_terminal().to_string());
    line(
        "StartupNotify",
        &descriptor.use_startup_notification().to_string(),
    );
    line("Hidden", &descriptor.is_hidden().to_string());
    match descriptor.visibility() {
        Visibility::All => {}
        Visibility::OnlyShowIn(names) => line("OnlyShowIn", &names.join(";")),
        Visibility::NotShowIn(names) => line("NotShowIn", &names.join(";")),
    }
    line("Shown", &descriptor.should_show().to_string());

    out
}
