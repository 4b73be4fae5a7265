use super::{EnqueueFlags, ProcId, SchedCtx, Scheduler, Ticks};

/// Slice granted when no quantum is configured explicitly.
pub const DEFAULT_QUANTUM: Ticks = 3;

/// Preemptive round-robin: every dispatch gets at most one quantum, and
/// both fresh arrivals and preempted processes join the queue at the tail.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// A quantum of zero would hand out empty slices forever; the loop
    /// would never terminate. Callers validate before constructing.
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum >= 1, "round-robin requires a quantum of at least 1");
        Self { quantum }
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Scheduler for RoundRobin {
    fn time_slice(&self, _ctx: &SchedCtx, _proc: ProcId) -> Ticks {
        self.quantum
    }

    fn enqueue(&mut self, ctx: &mut SchedCtx, proc: ProcId, flags: EnqueueFlags) {
        let _ = flags;
        ctx.ready_push_back(proc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;
    use crate::scheduler::{ENQ_ARRIVAL, ENQ_PREEMPT, ENQ_REENQ};

    #[test]
    #[should_panic(expected = "quantum of at least 1")]
    fn zero_quantum_is_rejected() {
        RoundRobin::new(0);
    }

    #[test]
    fn slice_is_the_quantum() {
        let ctx = SchedCtx::new(vec![Process::new(1, 0, 10)]);
        let rr = RoundRobin::new(4);
        assert_eq!(rr.time_slice(&ctx, 0), 4);
        assert_eq!(rr.quantum(), 4);
    }

    #[test]
    fn default_quantum_is_positive() {
        assert_eq!(RoundRobin::default().quantum(), DEFAULT_QUANTUM);
        assert!(DEFAULT_QUANTUM >= 1);
    }

    #[test]
    fn arrivals_and_requeues_both_join_the_tail() {
        let mut ctx = SchedCtx::new(vec![
            Process::new(1, 0, 5),
            Process::new(2, 0, 5),
            Process::new(3, 0, 5),
        ]);
        let mut rr = RoundRobin::new(2);

        for (id, flags) in [(0, ENQ_ARRIVAL), (1, ENQ_ARRIVAL), (2, ENQ_PREEMPT | ENQ_REENQ)] {
            ctx.mark_ready(id);
            rr.enqueue(&mut ctx, id, flags);
        }

        assert_eq!(ctx.ready_pop_front(), Some(0));
        assert_eq!(ctx.ready_pop_front(), Some(1));
        assert_eq!(ctx.ready_pop_front(), Some(2));
    }
}
