pub mod scenario;
pub mod simulator;

pub use scenario::Scenario;
pub use simulator::Command;
pub use simulator::Simulator;
