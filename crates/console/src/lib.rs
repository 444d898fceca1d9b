//! `stockroom-console`
//!
//! **Responsibility:** terminal front end for the inventory registry.
//!
//! This crate provides:
//! - Environment configuration
//! - The two dialog primitives (warning, confirmation)
//! - The main-screen controller (search, add, modify, delete)
//! - A line-oriented command loop
//!
//! The console is a **thin shell**: every rule lives in the registry.

pub mod commands;
pub mod config;
pub mod dialogs;
pub mod screen;
pub mod session;

pub use commands::{Command, CommandError};
pub use config::ConsoleConfig;
pub use dialogs::{Dialogs, Terminal};
pub use screen::MainScreen;
