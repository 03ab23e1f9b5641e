pub mod cost;
pub mod dispatcher;
mod dispatcher_tests;

pub use cost::cost;
pub use dispatcher::Dispatcher;
pub use dispatcher::MAX_ELEVATORS;
