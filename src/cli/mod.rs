//! Interactive command shell
//!
//! This module bridges lines typed at a prompt with the service layer,
//! using clap to parse each line.

pub mod commands;
pub mod shell;

pub use commands::{ShellCommand, ShellLine};
pub use shell::Shell;
