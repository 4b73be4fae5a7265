use crate::core::{ProcId, Ticks};

/// Trace of what one dispatch step did, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    /// CPU had nothing runnable; time jumped to the next arrival.
    Idle { from: Ticks, until: Ticks },
    /// Process joined the ready-queue tail.
    Admitted { proc: ProcId, at: Ticks },
    /// Process popped from the queue head and given the CPU.
    Dispatched { proc: ProcId, at: Ticks },
    /// Slice expired with time still owed; process requeued at the tail.
    Preempted { proc: ProcId, at: Ticks },
    /// Remaining time reached zero; process retired.
    Completed { proc: ProcId, at: Ticks },
}
