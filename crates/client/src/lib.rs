//! Text client for skirmish battles.
//!
//! The binary reads commands from stdin and hands them to a [`Shell`], which
//! drives a [`runtime::Session`] and renders the events it publishes.

pub mod commands;
pub mod config;
pub mod render;
pub mod shell;

pub use commands::{Command, CommandError};
pub use config::DisplayConfig;
pub use shell::{Reply, Shell};
