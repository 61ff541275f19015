pub mod agent;
pub mod exhibit;
pub mod limits;
pub mod params;
pub mod simulator;

pub use agent::Agent;
pub use exhibit::FlockExhibit;
pub use limits::FrameLimits;
pub use params::FlockParams;
pub use simulator::{FlockSimulator, Steering};
