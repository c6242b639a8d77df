//! CLI module for the health advisor
//!
//! Handles command-line argument parsing and configuration management.

pub mod config;
pub mod args;

pub use config::{Config, DisplayConfig};
pub use args::{Args, Commands, Verbosity};
