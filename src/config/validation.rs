//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - A terminal command with more than one `%s` placeholder
/// - A terminal command that is set but blank
/// - A desktop environment override that is empty
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if !config.terminal.is_empty() && config.terminal.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "terminal".to_string(),
            message: "Terminal command is blank. Falling back to $TERMINAL or xterm.".to_string(),
        });
    }

    let placeholders = config.terminal.matches("%s").count();
    if placeholders > 1 {
        warnings.push(ValidationWarning {
            field: "terminal".to_string(),
            message: format!(
                "Terminal command '{}' contains {} %s placeholders. Only the first is replaced.",
                config.terminal, placeholders
            ),
        });
    }

    if let Some(desktop_env) = &config.desktop_env
        && desktop_env.split(':').all(|name| name.trim().is_empty())
    {
        warnings.push(ValidationWarning {
            field: "desktop_env".to_string(),
            message: "Desktop environment override is empty and will be ignored.".to_string(),
        });
    }

    warnings
}
