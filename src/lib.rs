#[cfg(feature = "gui")]
mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
mod input;
pub mod presenters;
mod storage;

pub use config::{ConfigError, GalleryConfig};
pub use controllers::cli::headless::{ExhibitOutcome, HeadlessController, HeadlessError};
pub use controllers::completion_board::CompletionBoard;
pub use controllers::gallery::Gallery;
pub use crate::core::exhibit_kinds::ExhibitKind;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
