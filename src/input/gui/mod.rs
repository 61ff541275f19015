//! Windowed gallery viewer.
//!
//! winit owns the window and event loop, pixels shows the rasterized stage
//! and egui draws the control panel on top.

pub mod app;
pub mod commands;
