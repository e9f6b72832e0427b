//! CLI commands

pub mod build;
pub mod clean;
pub mod extract;
pub mod init;
pub mod list;
