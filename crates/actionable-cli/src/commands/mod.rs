//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

pub mod config;
pub mod extract;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
