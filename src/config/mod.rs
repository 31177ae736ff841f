//! Configuration module.
//!
//! Loads `~/.config/deskapp/config.toml` into a global [`AppConfig`].

mod service;
mod types;
mod validation;

pub use service::{
    config, config_dir, config_path, init_config, load_config_from, terminal_command,
};
pub use types::{AppConfig, FALLBACK_TERMINAL};
pub use validation::{ValidationWarning, validate_config};
