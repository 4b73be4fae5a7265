use rr_sim::input::{self, EINVAL};
use rr_sim::{RoundRobin, RunMetrics, Sim};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let name = args.first().map(String::as_str).unwrap_or("rr_sim");
        eprintln!("usage: {name} <process file> <quantum>");
        process::exit(EINVAL);
    }

    let processes = match input::load_workload(Path::new(&args[1])) {
        Ok(procs) => procs,
        Err(err) => {
            eprintln!("{}: {err}", args[1]);
            process::exit(err.exit_code());
        }
    };
    if processes.is_empty() {
        eprintln!("{}: describes no processes", args[1]);
        process::exit(EINVAL);
    }

    let quantum = match input::parse_quantum(&args[2]) {
        Ok(quantum) => quantum,
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    };

    let mut sim = Sim::new(processes, RoundRobin::new(quantum));
    sim.run();

    println!("{}", RunMetrics::from_processes(sim.processes()));
}
