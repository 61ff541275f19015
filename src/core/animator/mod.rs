pub mod beat;
pub mod run_state;
pub mod runner;

pub use beat::Beat;
pub use run_state::{AdvanceReport, RunPhase, RunState};
pub use runner::{Script, StepRunner};
