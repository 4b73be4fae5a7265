use std::collections::VecDeque;

// Index into the process Vec
pub type ProcId = usize;
pub type Pid = u64;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    /// Loaded but not yet admitted to the ready queue.
    Pending,
    Ready,
    Running,
    Completed,
}

/// One simulated process and the timing facts accumulated for it.
///
/// `pid`, `arrival_time` and `burst_time` come from the loader and are never
/// mutated; everything else is written by the scheduling loop.
#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub state: ProcState,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub started_at: Option<Ticks>,
    pub completed_at: Option<Ticks>,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            state: ProcState::Pending,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn has_run(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Time from arrival to first dispatch. `None` until the process has run.
    pub fn response_time(&self) -> Option<Ticks> {
        self.started_at.map(|start| start - self.arrival_time)
    }

    /// Total time spent eligible but not running, from arrival to completion.
    /// `None` until the process has completed.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.completed_at
            .map(|end| end - self.arrival_time - self.burst_time)
    }
}

/// State owned by one simulation run: the process table, the ready queue and
/// the admission cursor.
///
/// The ready queue holds indices into `procs`, never the records themselves.
/// `arrival_order` is the admission order: process indices sorted by
/// `(arrival_time, input index)`. This is the one tie-break rule, shared by
/// the initial seeding and every mid-run admission.
#[derive(Debug)]
pub struct SchedCtx {
    pub now: Ticks,
    pub current: Option<ProcId>,
    procs: Vec<Process>,
    ready: VecDeque<ProcId>,
    arrival_order: Vec<ProcId>,
    arrival_cursor: usize,
}

impl SchedCtx {
    pub fn new(procs: Vec<Process>) -> Self {
        let mut arrival_order: Vec<ProcId> = (0..procs.len()).collect();
        arrival_order.sort_by_key(|&id| (procs[id].arrival_time, id));

        // Simulated time starts at the earliest arrival, not at zero.
        let now = arrival_order
            .first()
            .map(|&id| procs[id].arrival_time)
            .unwrap_or(0);

        Self {
            now,
            current: None,
            procs,
            ready: VecDeque::new(),
            arrival_order,
            arrival_cursor: 0,
        }
    }

    pub fn proc(&self, id: ProcId) -> &Process {
        &self.procs[id]
    }

    pub fn proc_mut(&mut self, id: ProcId) -> &mut Process {
        &mut self.procs[id]
    }

    pub fn processes(&self) -> &[Process] {
        &self.procs
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn advance_to(&mut self, t: Ticks) {
        debug_assert!(t >= self.now, "time may not move backwards");
        self.now = t;
    }

    /// Arrival time of the earliest process still waiting to be admitted.
    pub fn next_pending_arrival(&self) -> Option<Ticks> {
        self.arrival_order
            .get(self.arrival_cursor)
            .map(|&id| self.procs[id].arrival_time)
    }

    /// Next process due for admission at the current time, in
    /// `(arrival_time, input index)` order. Advances the cursor.
    pub fn pop_due_arrival(&mut self) -> Option<ProcId> {
        let &id = self.arrival_order.get(self.arrival_cursor)?;
        if self.procs[id].arrival_time > self.now {
            return None;
        }
        self.arrival_cursor += 1;
        Some(id)
    }

    pub fn ready_push_back(&mut self, id: ProcId) {
        let proc = &self.procs[id];
        debug_assert_eq!(
            proc.state,
            ProcState::Ready,
            "process {id} must be Ready when enqueued"
        );
        debug_assert!(
            !self.ready.contains(&id),
            "process {id} already present in the ready queue"
        );
        self.ready.push_back(id);
    }

    pub fn ready_pop_front(&mut self) -> Option<ProcId> {
        self.ready.pop_front()
    }

    pub fn ready_is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    pub fn ready_iter(&self) -> impl Iterator<Item = ProcId> + '_ {
        self.ready.iter().copied()
    }

    pub fn mark_ready(&mut self, id: ProcId) {
        if self.current == Some(id) {
            self.current = None;
        }
        let proc = &mut self.procs[id];
        debug_assert!(
            proc.state != ProcState::Completed,
            "completed process {id} cannot become ready"
        );
        proc.state = ProcState::Ready;
    }

    pub fn set_running(&mut self, id: ProcId) {
        debug_assert!(
            self.current.is_none(),
            "CPU already running process {:?}",
            self.current
        );
        let proc = &mut self.procs[id];
        debug_assert_eq!(
            proc.state,
            ProcState::Ready,
            "process {id} must be Ready to be dispatched"
        );
        proc.state = ProcState::Running;
        self.current = Some(id);
    }

    pub fn mark_completed(&mut self, id: ProcId) {
        debug_assert!(
            !self.ready.contains(&id),
            "completing process {id} that is still enqueued"
        );
        if self.current == Some(id) {
            self.current = None;
        }
        let now = self.now;
        let proc = &mut self.procs[id];
        debug_assert_eq!(
            proc.state,
            ProcState::Running,
            "process {id} must have been running to complete"
        );
        debug_assert_eq!(
            proc.remaining_time, 0,
            "process {id} completed with time still owed"
        );
        proc.state = ProcState::Completed;
        proc.completed_at = Some(now);
    }

    pub fn all_complete(&self) -> bool {
        self.procs.iter().all(|p| p.is_complete())
    }
}
