//! Input adapters that turn user interaction into gallery commands.

#[cfg(feature = "gui")]
pub mod gui;
