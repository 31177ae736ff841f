//! `Exec=` field code expansion and command line assembly.
//!
//! Field codes are replaced in a single left-to-right pass:
//!
//! | code | replacement |
//! |------|-------------|
//! | `%f` | first target as a quoted path |
//! | `%F` | all targets as quoted paths |
//! | `%u` | first target as a quoted URI |
//! | `%U` | all targets as quoted URIs |
//! | `%i` | `--icon <icon name>` when the entry has an icon |
//! | `%c` | the entry name |
//! | `%k` | nothing |
//! | `%%` | a literal `%` |
//!
//! Any other code is dropped together with its `%`.

use crate::desktop::entry::LauncherDescriptor;
use crate::desktop::target::Target;
use crate::error::LaunchError;

/// Quote `s` so a POSIX shell reads it back as one literal word.
///
/// The result is always single-quoted; embedded single quotes become `'\''`.
pub fn shell_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

fn quoted_paths<'a>(targets: impl IntoIterator<Item = &'a Target>) -> String {
    targets
        .into_iter()
        .map(|t| shell_quote(&t.path_or_uri()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quoted_uris<'a>(targets: impl IntoIterator<Item = &'a Target>) -> String {
    targets
        .into_iter()
        .map(|t| shell_quote(t.uri()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand the field codes of `exec` for `descriptor` and `targets`.
///
/// When targets are given but `exec` has none of `%f`, `%F`, `%u`, `%U`,
/// the first target is appended as if the template ended in `%f`.
pub fn expand_exec(descriptor: &LauncherDescriptor, exec: &str, targets: &[Target]) -> String {
    let mut cmd = String::with_capacity(exec.len() + 64);
    let mut files_added = false;
    let mut chars = exec.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            cmd.push(c);
            continue;
        }

        let Some(code) = chars.next() else {
            break;
        };

        match code {
            'f' => {
                cmd.push_str(&quoted_paths(targets.first()));
                files_added = true;
            }
            'F' => {
                cmd.push_str(&quoted_paths(targets));
                files_added = true;
            }
            'u' => {
                cmd.push_str(&quoted_uris(targets.first()));
                files_added = true;
            }
            'U' => {
                cmd.push_str(&quoted_uris(targets));
                files_added = true;
            }
            '%' => cmd.push('%'),
            'i' => {
                if let Some(icon_name) = descriptor.icon_name().filter(|n| !n.is_empty()) {
                    cmd.push_str("--icon ");
                    cmd.push_str(icon_name);
                }
            }
            'c' => {
                if let Some(name) = descriptor.name() {
                    cmd.push_str(name);
                }
            }
            _ => {}
        }
    }

    if !files_added && let Some(first) = targets.first() {
        if !cmd.is_empty() && !cmd.ends_with(char::is_whitespace) {
            cmd.push(' ');
        }
        cmd.push_str(&quoted_paths([first]));
    }

    cmd
}

/// Run `command` inside `terminal`.
///
/// The first `%s` in `terminal` is replaced by `command`; without a `%s`,
/// `-e <command>` is appended. `command` is inserted as is, not quoted.
pub fn wrap_in_terminal(command: &str, terminal: &str) -> String {
    if terminal.contains("%s") {
        terminal.replacen("%s", command, 1)
    } else {
        format!("{} -e {}", terminal, command)
    }
}

/// The full command line for launching `descriptor` on `targets`.
///
/// Link entries have no command and yield an empty string.
pub fn build_command(descriptor: &LauncherDescriptor, targets: &[Target], terminal: &str) -> String {
    let Some(exec) = descriptor.exec() else {
        return String::new();
    };

    let cmd = expand_exec(descriptor, exec, targets);
    if descriptor.use_terminal() {
        wrap_in_terminal(&cmd, terminal)
    } else {
        cmd
    }
}

/// Split a command line into an argument vector using shell quoting rules.
pub fn split_command(command: &str) -> Result<Vec<String>, LaunchError> {
    shlex::split(command).ok_or_else(|| LaunchError::MalformedCommand(command.to_string()))
}

/// Whether `exec` takes local file arguments.
pub fn accepts_files(exec: &str) -> bool {
    exec.contains("%f") || exec.contains("%F")
}

/// Whether `exec` takes URI arguments.
pub fn accepts_uris(exec: &str) -> bool {
    exec.contains("%u") || exec.contains("%U")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_application, mock_link, parse_entry};

    fn paths(list: &[&str]) -> Vec<Target> {
        list.iter().map(Target::from_path).collect()
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/tmp/a.txt"), "'/tmp/a.txt'");
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn test_quote_round_trips_through_split() {
        for s in ["plain", "with space", "it's", "$HOME", "a\"b", "tab\there"] {
            assert_eq!(split_command(&shell_quote(s)).unwrap(), vec![s.to_string()]);
        }
    }

    #[test]
    fn test_expand_single_file() {
        let app = mock_application("foo %f");
        let cmd = build_command(&app, &paths(&["/tmp/a.txt"]), "xterm");
        assert_eq!(cmd, "foo '/tmp/a.txt'");
    }

    #[test]
    fn test_expand_first_file_only_once() {
        let app = mock_application("foo %f");
        let cmd = build_command(&app, &paths(&["/tmp/a.txt", "/tmp/b.txt"]), "xterm");
        assert_eq!(cmd.matches("'/tmp/a.txt'").count(), 1);
        assert!(!cmd.contains("b.txt"));
        assert!(!cmd.contains("%f"));
    }

    #[test]
    fn test_expand_all_files() {
        let app = mock_application("foo %F --end");
        let cmd = build_command(&app, &paths(&["/a", "/b c"]), "xterm");
        assert_eq!(cmd, "foo '/a' '/b c' --end");
    }

    #[test]
    fn test_expand_uris() {
        let app = mock_application("browser %U");
        let targets = vec![
            Target::from_path("/tmp/x y.html"),
            Target::from_uri("https://example.com/"),
        ];
        let cmd = build_command(&app, &targets, "xterm");
        assert_eq!(
            cmd,
            "browser 'file:///tmp/x%20y.html' 'https://example.com/'"
        );
    }

    #[test]
    fn test_expand_single_uri() {
        let app = mock_application("open %u");
        let targets = vec![Target::from_uri("https://a/"), Target::from_uri("https://b/")];
        assert_eq!(build_command(&app, &targets, "xterm"), "open 'https://a/'");
    }

    #[test]
    fn test_file_code_on_remote_uri_uses_uri() {
        let app = mock_application("view %f");
        let targets = vec![Target::from_uri("sftp://host/file")];
        assert_eq!(build_command(&app, &targets, "xterm"), "view 'sftp://host/file'");
    }

    #[test]
    fn test_expand_without_targets_drops_codes() {
        let app = mock_application("foo %F %U");
        assert_eq!(build_command(&app, &[], "xterm"), "foo  ");
    }

    #[test]
    fn test_implicit_file_argument() {
        let app = mock_application("bar");
        let cmd = build_command(&app, &paths(&["/tmp/a.txt", "/tmp/b.txt"]), "xterm");
        assert_eq!(cmd, "bar '/tmp/a.txt'");
        assert!(cmd.ends_with(&shell_quote("/tmp/a.txt")));
    }

    #[test]
    fn test_implicit_file_after_trailing_space() {
        let app = mock_application("bar --open ");
        let cmd = build_command(&app, &paths(&["/tmp/a.txt"]), "xterm");
        assert_eq!(cmd, "bar --open '/tmp/a.txt'");
    }

    #[test]
    fn test_percent_escapes() {
        let app = mock_application("printf 100%% %z done%");
        assert_eq!(build_command(&app, &[], "xterm"), "printf 100%  done");
    }

    #[test]
    fn test_icon_and_name_codes() {
        let mut app = mock_application("viewer %i --title %c %k");
        app.set_icon_name(Some("viewer.png"));
        app.set_name(Some("Viewer".to_string()));
        assert_eq!(
            build_command(&app, &[], "xterm"),
            "viewer --icon viewer --title Viewer "
        );
    }

    #[test]
    fn test_icon_code_without_icon() {
        let app = mock_application("viewer %i");
        assert_eq!(build_command(&app, &[], "xterm"), "viewer ");
    }

    #[test]
    fn test_icon_code_with_empty_icon() {
        let app = parse_entry("[Desktop Entry]\nType=Application\nIcon=\nExec=viewer %i\n")
            .unwrap();
        assert_eq!(build_command(&app, &[], "xterm"), "viewer ");

        let mut app = mock_application("viewer %i");
        app.set_icon_name(Some(""));
        assert_eq!(build_command(&app, &[], "xterm"), "viewer ");
    }

    #[test]
    fn test_terminal_with_placeholder() {
        let mut app = mock_application("bar");
        app.set_use_terminal(true);
        assert_eq!(build_command(&app, &[], "xterm -e %s"), "xterm -e bar");
        assert_eq!(
            build_command(&app, &paths(&["/tmp/a"]), "xterm -e %s"),
            "xterm -e bar '/tmp/a'"
        );
    }

    #[test]
    fn test_terminal_without_placeholder() {
        let mut app = mock_application("bar");
        app.set_use_terminal(true);
        assert_eq!(build_command(&app, &[], "xterm"), "xterm -e bar");
    }

    #[test]
    fn test_terminal_placeholder_replaced_once() {
        assert_eq!(wrap_in_terminal("top", "t -T %s -e %s"), "t -T top -e %s");
    }

    #[test]
    fn test_link_has_no_command() {
        let link = mock_link("http://example.com");
        assert_eq!(build_command(&link, &[], "xterm"), "");
    }

    #[test]
    fn test_split_command() {
        assert_eq!(
            split_command("foo '/tmp/a b.txt' --x").unwrap(),
            vec!["foo", "/tmp/a b.txt", "--x"]
        );
    }

    #[test]
    fn test_split_malformed_command() {
        let result = split_command("foo 'unterminated");
        assert!(matches!(result, Err(LaunchError::MalformedCommand(cmd)) if cmd == "foo 'unterminated"));
    }

    #[test]
    fn test_accepts_files_and_uris() {
        assert!(accepts_files("gimp %F"));
        assert!(!accepts_files("gimp %U"));
        assert!(accepts_uris("firefox %u"));
        assert!(!accepts_uris("firefox"));
    }
}
