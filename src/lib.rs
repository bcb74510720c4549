pub mod api;
pub mod bulk;
pub mod cli;
pub mod commands;
pub mod config;
pub mod workspace;
