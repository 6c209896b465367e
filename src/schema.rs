use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMeta {
    pub schema_version: u32,
    pub bench_version: String,
    pub repeat: u64,
    pub strategy: String,
    pub timestamp_utc: String,
}

/// One trial: a backend, the Fibonacci index it computed, and the two
/// separately timed sub-steps in seconds. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub backend: String,
    pub input_size: u64,

    pub compute_s: f64,
    pub print_s: f64,
}

impl Measurement {
    /// Render as one results-log line: comma-delimited, durations as plain
    /// decimal seconds, no header, no quoting, no unit suffix.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.backend, self.input_size, self.compute_s, self.print_s
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub run: RunMeta,
    pub measurements: Vec<Measurement>,
}
