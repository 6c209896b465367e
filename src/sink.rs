//! Result aggregation and persistence.
//!
//! The sink owns ordering: measurements arrive in completion order and are
//! sorted into a stable total order (backend lexicographic, then input
//! size numeric) before being appended to the results log. The log is
//! append-only; prior runs are never rewritten.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::BenchError;
use crate::schema::Measurement;

/// Sort into the persisted order: backend ascending, then input size.
pub fn sort_measurements(measurements: &mut [Measurement]) {
    measurements.sort_by(|a, b| {
        a.backend
            .cmp(&b.backend)
            .then(a.input_size.cmp(&b.input_size))
    });
}

/// Where a finished run's measurements go. Injected into the binary so
/// tests can run against a temp file or drop results entirely.
pub trait ResultSink {
    fn persist(&mut self, measurements: &[Measurement]) -> Result<(), BenchError>;
}

/// Appends sorted lines to a results log, creating it on first use.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn log_err(&self, source: std::io::Error) -> BenchError {
        BenchError::ResultLog {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultSink for FileSink {
    fn persist(&mut self, measurements: &[Measurement]) -> Result<(), BenchError> {
        let mut sorted = measurements.to_vec();
        sort_measurements(&mut sorted);

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| self.log_err(e))?;
        let mut writer = BufWriter::new(file);

        for m in &sorted {
            writeln!(writer, "{}", m.to_line()).map_err(|e| self.log_err(e))?;
        }
        writer.flush().map_err(|e| self.log_err(e))?;

        info!(
            "appended {} measurement(s) to {}",
            sorted.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Discards everything; used for observation-only runs.
pub struct NullSink;

impl ResultSink for NullSink {
    fn persist(&mut self, _measurements: &[Measurement]) -> Result<(), BenchError> {
        Ok(())
    }
}
