use super::state::{ProcState, SchedCtx, Ticks};
use rustc_hash::FxHashSet;

/// Checks cross-structure consistency after every dispatch step. All checks
/// are debug_asserts; release builds pay nothing.
#[derive(Debug)]
pub struct Observer {
    steps: u64,
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            steps: 0,
            last_now: 0,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.steps += 1;

        debug_assert!(
            ctx.now >= self.last_now,
            "time moved backwards: {} -> {}",
            self.last_now,
            ctx.now
        );
        self.last_now = ctx.now;

        let mut queued = FxHashSet::default();
        for id in ctx.ready_iter() {
            debug_assert!(queued.insert(id), "process {id} queued twice");
            let proc = ctx.proc(id);
            debug_assert_eq!(
                proc.state,
                ProcState::Ready,
                "queued process {id} is not Ready"
            );
            // A zero-burst process waits with nothing owed until its first
            // zero-length dispatch.
            debug_assert!(
                proc.remaining_time > 0 || !proc.has_run(),
                "exhausted process {id} still queued"
            );
        }

        if let Some(id) = ctx.current {
            debug_assert_eq!(
                ctx.proc(id).state,
                ProcState::Running,
                "current process {id} is not Running"
            );
            debug_assert!(
                !queued.contains(&id),
                "running process {id} must not appear in the ready queue"
            );
        }

        for (id, proc) in ctx.processes().iter().enumerate() {
            match proc.state {
                ProcState::Pending => {
                    debug_assert!(
                        !proc.has_run(),
                        "pending process {id} has already run"
                    );
                }
                ProcState::Ready => {
                    debug_assert!(
                        queued.contains(&id),
                        "ready process {id} is missing from the queue"
                    );
                }
                ProcState::Running => {
                    debug_assert_eq!(
                        ctx.current,
                        Some(id),
                        "process {id} claims the CPU but does not hold it"
                    );
                }
                ProcState::Completed => {
                    debug_assert!(
                        proc.is_complete() && proc.remaining_time == 0,
                        "completed process {id} with inconsistent record"
                    );
                }
            }
        }
    }
}
