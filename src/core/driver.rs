use super::{
    event::SchedEvent,
    observer::Observer,
    state::{Process, SchedCtx, Ticks},
};
use crate::scheduler::{ENQ_ARRIVAL, ENQ_PREEMPT, ENQ_REENQ, Scheduler};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SchedCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(procs: Vec<Process>, scheduler: S) -> Self {
        Self {
            ctx: SchedCtx::new(procs),
            scheduler,
            observer: Observer::new(),
        }
    }

    /// One dispatch step: give the CPU to the queue head for one slice,
    /// admit everything that arrived during the slice, then requeue or
    /// retire the process that ran. Returns the trace of what happened.
    ///
    /// Admission strictly precedes the requeue decision, so a process that
    /// arrives during a slice is served before the process the slice
    /// preempted.
    pub fn step(&mut self) -> Vec<SchedEvent> {
        let mut events = Vec::new();

        if self.ctx.ready_is_empty() {
            self.fast_forward(&mut events);
        }

        let Some(id) = self.ctx.ready_pop_front() else {
            // Nothing pending and nothing queued: the run is over.
            return events;
        };

        let start_time = self.ctx.now;
        self.ctx.set_running(id);
        events.push(SchedEvent::Dispatched {
            proc: id,
            at: start_time,
        });

        if !self.ctx.proc(id).has_run() {
            self.ctx.proc_mut(id).started_at = Some(start_time);
        }

        let slice = self
            .scheduler
            .time_slice(&self.ctx, id)
            .min(self.ctx.proc(id).remaining_time);
        self.ctx.advance_time(slice);
        self.ctx.proc_mut(id).remaining_time -= slice;

        self.admit_arrivals(&mut events);

        if self.ctx.proc(id).remaining_time > 0 {
            self.ctx.mark_ready(id);
            self.scheduler
                .enqueue(&mut self.ctx, id, ENQ_PREEMPT | ENQ_REENQ);
            events.push(SchedEvent::Preempted {
                proc: id,
                at: self.ctx.now,
            });
        } else {
            self.ctx.mark_completed(id);
            events.push(SchedEvent::Completed {
                proc: id,
                at: self.ctx.now,
            });
        }

        self.observer.observe(&self.ctx);
        events
    }

    pub fn run(&mut self) {
        while !self.ctx.all_complete() {
            self.step();
        }
    }

    /// Enqueue every pending process whose arrival time has passed, in
    /// `(arrival_time, input index)` order.
    fn admit_arrivals(&mut self, events: &mut Vec<SchedEvent>) {
        while let Some(id) = self.ctx.pop_due_arrival() {
            self.ctx.mark_ready(id);
            self.scheduler.enqueue(&mut self.ctx, id, ENQ_ARRIVAL);
            events.push(SchedEvent::Admitted {
                proc: id,
                at: self.ctx.now,
            });
        }
    }

    /// The queue is empty. If processes are still pending, jump simulated
    /// time to the next arrival and admit there. Seeds the first dispatch
    /// too: `now` already sits at the earliest arrival, so no idle period
    /// is reported for it.
    fn fast_forward(&mut self, events: &mut Vec<SchedEvent>) {
        let Some(arrival) = self.ctx.next_pending_arrival() else {
            return;
        };
        if arrival > self.ctx.now {
            events.push(SchedEvent::Idle {
                from: self.ctx.now,
                until: arrival,
            });
            self.ctx.advance_to(arrival);
        }
        self.admit_arrivals(events);
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Pid, ProcState, Ticks};
    use crate::scheduler::RoundRobin;

    fn core_of(triples: &[(Pid, Ticks, Ticks)], quantum: Ticks) -> SchedCore<RoundRobin> {
        let procs = triples
            .iter()
            .map(|&(pid, arrival, burst)| Process::new(pid, arrival, burst))
            .collect();
        SchedCore::new(procs, RoundRobin::new(quantum))
    }

    #[test]
    fn first_step_seeds_dispatches_and_preempts() {
        let mut core = core_of(&[(1, 0, 5), (2, 1, 3)], 2);
        let events = core.step();

        assert_eq!(
            events,
            vec![
                SchedEvent::Admitted { proc: 0, at: 0 },
                SchedEvent::Dispatched { proc: 0, at: 0 },
                SchedEvent::Admitted { proc: 1, at: 2 },
                SchedEvent::Preempted { proc: 0, at: 2 },
            ]
        );
        assert_eq!(core.now(), 2);
        assert_eq!(core.ctx.proc(0).remaining_time, 3);
        assert_eq!(core.ctx.proc(0).started_at, Some(0));
        assert_eq!(core.ctx.proc(1).state, ProcState::Ready);
    }

    #[test]
    fn arrival_during_slice_runs_before_the_preempted_process() {
        let mut core = core_of(&[(1, 0, 10), (2, 1, 2)], 3);
        core.step();

        let events = core.step();
        assert_eq!(events[0], SchedEvent::Dispatched { proc: 1, at: 3 });
    }

    #[test]
    fn completion_happens_at_slice_end() {
        let mut core = core_of(&[(1, 0, 4)], 2);
        core.step();
        let events = core.step();

        assert_eq!(events.last(), Some(&SchedEvent::Completed { proc: 0, at: 4 }));
        assert_eq!(core.ctx.proc(0).completed_at, Some(4));
        assert!(core.ctx.all_complete());
    }

    #[test]
    fn queue_drain_fast_forwards_to_the_next_arrival() {
        let mut core = core_of(&[(1, 0, 2), (2, 10, 3)], 4);
        core.step();
        assert_eq!(core.now(), 2);

        let events = core.step();
        assert_eq!(events[0], SchedEvent::Idle { from: 2, until: 10 });
        assert_eq!(events[1], SchedEvent::Admitted { proc: 1, at: 10 });
        assert_eq!(events[2], SchedEvent::Dispatched { proc: 1, at: 10 });
        assert_eq!(core.ctx.proc(1).started_at, Some(10));
    }

    #[test]
    fn zero_burst_process_completes_at_dispatch_time() {
        let mut core = core_of(&[(1, 0, 0), (2, 0, 4)], 2);
        let events = core.step();

        assert!(events.contains(&SchedEvent::Completed { proc: 0, at: 0 }));
        assert_eq!(core.now(), 0);
        assert_eq!(core.ctx.proc(0).waiting_time(), Some(0));
        assert_eq!(core.ctx.proc(0).response_time(), Some(0));
    }

    #[test]
    fn zero_burst_arrival_waits_in_the_queue_then_completes() {
        // Arrives mid-slice, so it sits in the ready queue owing nothing
        // until its turn.
        let mut core = core_of(&[(1, 0, 5), (2, 1, 0)], 2);
        core.run();

        assert_eq!(core.ctx.proc(1).started_at, Some(2));
        assert_eq!(core.ctx.proc(1).completed_at, Some(2));
        assert_eq!(core.ctx.proc(1).waiting_time(), Some(1));
        assert_eq!(core.ctx.proc(1).response_time(), Some(1));
    }

    #[test]
    fn step_after_the_run_is_a_no_op() {
        let mut core = core_of(&[(1, 0, 1)], 2);
        core.run();
        assert!(core.step().is_empty());
        assert_eq!(core.now(), 1);
    }

    #[test]
    fn observer_counts_dispatch_steps() {
        // 7 ticks of work at quantum 2 is 4 slices.
        let mut core = core_of(&[(1, 0, 7)], 2);
        core.run();
        assert_eq!(core.observer().steps(), 4);
    }
}
