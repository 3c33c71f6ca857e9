mod args;
mod commands;
pub mod config;
mod handlers;
mod input;
mod render;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
