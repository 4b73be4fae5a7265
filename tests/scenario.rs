use rr_sim::input::{load_workload, parse_quantum, parse_workload};
use rr_sim::{RoundRobin, RunMetrics, Sim};
use std::fs;

const SAMPLE_WORKLOAD: &[u8] = b"3\n1, 0, 5\n2, 1, 3\n3, 2, 1\n";

#[test]
fn sample_workload_end_to_end() {
    let processes = parse_workload(SAMPLE_WORKLOAD).unwrap();
    let quantum = parse_quantum("2").unwrap();

    let mut sim = Sim::new(processes, RoundRobin::new(quantum));
    sim.run();

    let report = RunMetrics::from_processes(sim.processes()).to_string();
    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("Average waiting time: 3.33"));
    assert_eq!(lines.next(), Some("Average response time: 1.00"));
    assert_eq!(lines.next(), None);
}

#[test]
fn workload_loads_from_a_file() {
    let path = std::env::temp_dir().join(format!("rr_sim_scenario_{}.txt", std::process::id()));
    fs::write(&path, SAMPLE_WORKLOAD).unwrap();

    let processes = load_workload(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(processes.len(), 3);
    assert_eq!(processes[1].pid, 2);
    assert_eq!(processes[1].arrival_time, 1);
    assert_eq!(processes[1].burst_time, 3);
}

#[test]
fn quantum_one_interleaves_fairly() {
    // Two equal processes arriving together alternate tick by tick.
    let processes = parse_workload(b"2\n1 0 3\n2 0 3\n").unwrap();
    let mut sim = Sim::new(processes, RoundRobin::new(1));
    sim.run();

    // P1: runs at 0,2,4 -> completes 5. P2: runs at 1,3,5 -> completes 6.
    assert_eq!(sim.processes()[0].completed_at, Some(5));
    assert_eq!(sim.processes()[1].completed_at, Some(6));
    assert_eq!(sim.processes()[0].waiting_time(), Some(2));
    assert_eq!(sim.processes()[1].waiting_time(), Some(3));
    assert_eq!(sim.processes()[1].response_time(), Some(1));
}
