//! Command handlers -- one module per subcommand

pub mod config;
pub mod creation_info;
pub mod render;
