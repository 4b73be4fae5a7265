pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use event::SchedEvent;
pub use state::{Pid, ProcId, ProcState, Process, SchedCtx, Ticks};
