use crate::core::state::Process;
use average::Estimate;
use std::fmt;

/// The two averages a completed run reduces to.
///
/// Expects every record to be complete; feeding it a half-run schedule is a
/// caller bug. Pure reduction, so recomputing over the same records always
/// yields the same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunMetrics {
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
}

impl RunMetrics {
    pub fn from_processes(procs: &[Process]) -> Self {
        let avg_waiting_time = avg(procs.iter().map(|p| {
            p.waiting_time()
                .expect("metrics require a completed run") as f64
        }));
        let avg_response_time = avg(procs.iter().map(|p| {
            p.response_time()
                .expect("metrics require a completed run") as f64
        }));
        Self {
            avg_waiting_time,
            avg_response_time,
        }
    }
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average waiting time: {:.2}", self.avg_waiting_time)?;
        write!(f, "Average response time: {:.2}", self.avg_response_time)
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
