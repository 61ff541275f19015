pub mod board;
pub mod driver;
pub mod layout;
pub mod moves;
pub mod tower;

pub use driver::PuzzleDriver;
