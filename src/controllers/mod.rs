pub mod cli;
pub mod completion_board;
pub mod gallery;
pub mod ports;
