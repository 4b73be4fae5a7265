pub mod driver;
pub mod metrics;

pub use driver::Sim;
pub use metrics::RunMetrics;
