//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Terminal used when neither the config nor `$TERMINAL` names one.
pub const FALLBACK_TERMINAL: &str = "xterm";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal emulator command line used for `Terminal=true` entries.
    ///
    /// A `%s` placeholder is replaced by the command to run; without one,
    /// ` -e <command>` is appended. Empty means "use `$TERMINAL` or xterm".
    pub terminal: String,
    /// Desktop environment name(s), colon separated, overriding
    /// `$XDG_CURRENT_DESKTOP` for `OnlyShowIn`/`NotShowIn` checks.
    pub desktop_env: Option<String>,
    /// Icon theme to prefer when resolving themed icons to files.
    pub icon_theme: Option<String>,
}

impl AppConfig {
    /// Const default for static initialization.
    pub const fn default_const() -> Self {
        Self {
            terminal: String::new(),
            desktop_env: None,
            icon_theme: None,
        }
    }

    /// The terminal command line to wrap commands with.
    pub fn terminal_command(&self) -> String {
        if !self.terminal.trim().is_empty() {
            return self.terminal.clone();
        }
        std::env::var("TERMINAL")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_TERMINAL.to_string())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_const()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_command_uses_configured_value() {
        let config = AppConfig {
            terminal: "foot -e %s".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.terminal_command(), "foot -e %s");
    }

    #[test]
    fn test_terminal_command_never_empty() {
        let config = AppConfig {
            terminal: "   ".to_string(),
            ..AppConfig::default()
        };
        assert!(!config.terminal_command().trim().is_empty());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str("terminal = \"xterm -e %s\"").unwrap();
        assert_eq!(config.terminal, "xterm -e %s");
        assert_eq!(config.desktop_env, None);
        assert_eq!(config.icon_theme, None);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: AppConfig = toml::from_str(
            "terminal = \"urxvt\"\ndesktop_env = \"LXDE\"\nicon_theme = \"Adwaita\"\n",
        )
        .unwrap();
        assert_eq!(config.terminal, "urxvt");
        assert_eq!(config.desktop_env.as_deref(), Some("LXDE"));
        assert_eq!(config.icon_theme.as_deref(), Some("Adwaita"));
    }
}
