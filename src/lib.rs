//! Elevator bank simulation: hall-call dispatch and per-car motion, advanced
//! one discrete tick at a time.

/* Modules */
pub mod config;
pub mod dispatcher;
pub mod elevator;
pub mod shared;
pub mod simulation;

pub use dispatcher::Dispatcher;
pub use elevator::Elevator;
pub use shared::{CallDirection, Direction, DispatchError, Status};
