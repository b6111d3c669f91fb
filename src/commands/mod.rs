//! CLI commands

pub mod article;
pub mod init;
pub mod list;
pub mod render;
