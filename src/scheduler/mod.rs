pub mod round_robin;

use crate::core::{
    Ticks,
    state::{ProcId, SchedCtx},
};
pub use round_robin::RoundRobin;

pub type EnqueueFlags = u64;

/// Process became runnable because its arrival time passed.
pub const ENQ_ARRIVAL: EnqueueFlags = 1 << 0;
/// Process lost the CPU with time still owed.
pub const ENQ_PREEMPT: EnqueueFlags = 1 << 1;
/// Re-entering the queue, not entering it for the first time.
pub const ENQ_REENQ: EnqueueFlags = 1 << 2;

/// Scheduling policy consulted by the dispatch loop.
///
/// The loop owns the mechanism (time jumps, admission order, completion
/// bookkeeping); the policy decides how long a dispatched process may run
/// and where a runnable process lands in the ready queue. The admitted batch
/// arrives here already ordered; a policy must not reorder processes within
/// one admission point.
pub trait Scheduler {
    /// Slice granted to `proc` for the coming dispatch. The loop caps it at
    /// the process's remaining time.
    fn time_slice(&self, ctx: &SchedCtx, proc: ProcId) -> Ticks;

    /// Place a runnable process into the ready queue.
    fn enqueue(&mut self, ctx: &mut SchedCtx, proc: ProcId, flags: EnqueueFlags);
}
