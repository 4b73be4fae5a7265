pub mod core;
pub mod input;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Process, SchedEvent};
pub use scheduler::{RoundRobin, Scheduler};
pub use sim::{RunMetrics, Sim};
