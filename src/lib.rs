pub mod app;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod desktop;
pub mod error;
pub mod process;

#[cfg(test)]
pub mod test_utils;
