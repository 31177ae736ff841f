//! Domain-specific error types for deskapp.
//!
//! One error enum per domain: parsing desktop entries, launching them,
//! spawning processes and loading configuration.

use thiserror::Error;

/// Errors produced while constructing a launcher descriptor.
///
/// No descriptor is ever returned alongside one of these; parsing either
/// yields a complete descriptor or fails.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The desktop file could not be read.
    #[error("Failed to read desktop file: {0}")]
    Read(#[source] std::io::Error),

    /// The key-value document could not be decoded.
    #[error("Failed to decode desktop entry: {0}")]
    Decode(String),

    /// No desktop file with the given id exists in the search path.
    #[error("Desktop entry '{0}' not found")]
    NotFound(String),

    /// The `Desktop Entry` group has no `Type` key.
    #[error("Desktop entry has no Type key")]
    MissingType,

    /// The `Type` key names something other than `Application` or `Link`.
    #[error("Unsupported desktop entry type '{0}'")]
    UnsupportedType(String),
}

/// Errors produced while launching a descriptor.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The entry has no command to run.
    #[error("Desktop entry has no Exec command")]
    NotLaunchable,

    /// The expanded command line could not be split into arguments.
    #[error("Malformed command line: {0}")]
    MalformedCommand(String),

    /// The child process could not be started.
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The operation is not implemented for this kind of entry.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Targets were passed to an entry that cannot take arguments.
    #[error("Link entries do not accept file or URI targets")]
    TargetsNotAccepted,
}

/// Process execution errors.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The argument vector was empty.
    #[error("Empty exec command")]
    EmptyCommand,

    /// Failed to spawn the process.
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[source] std::io::Error),
}

impl From<ProcessError> for LaunchError {
    fn from(e: ProcessError) -> Self {
        match e {
            ProcessError::EmptyCommand => LaunchError::NotLaunchable,
            ProcessError::SpawnFailed(err) => LaunchError::SpawnFailed(err),
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}
