use crate::{
    core::{
        driver::SchedCore,
        event::SchedEvent,
        state::{Process, Ticks},
    },
    scheduler::Scheduler,
};

/// One simulation run: owns the scheduling core, drives it to completion
/// and hands the completed records to the metrics pass.
pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(processes: Vec<Process>, scheduler: S) -> Self {
        assert!(
            !processes.is_empty(),
            "simulation requires at least one process"
        );
        Self {
            core: SchedCore::new(processes, scheduler),
        }
    }

    /// One dispatch step; see [`SchedCore::step`].
    pub fn step(&mut self) -> Vec<SchedEvent> {
        self.core.step()
    }

    /// Run the whole schedule. Every process has completed afterwards.
    pub fn run(&mut self) {
        while !self.all_complete() {
            self.step();
        }
    }

    pub fn all_complete(&self) -> bool {
        self.core.ctx.all_complete()
    }

    pub fn now(&self) -> Ticks {
        self.core.now()
    }

    pub fn processes(&self) -> &[Process] {
        self.core.ctx.processes()
    }

    pub fn procs_map<'a, T>(
        &'a self,
        f: impl FnMut(&Process) -> T + 'a,
    ) -> impl Iterator<Item = T> + 'a {
        self.core.ctx.processes().iter().map(f)
    }
}
