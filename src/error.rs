use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything in the harness is fail-fast: no variant here is recovered
/// locally, every one terminates the run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("configuration: {0}")]
    Config(String),

    #[error("backend {backend} produced an incorrect value for fib({index}) with the {strategy} strategy")]
    Correctness {
        backend: String,
        strategy: &'static str,
        index: u64,
    },

    #[error("fibonacci index must be at least 1 (got {0})")]
    Precondition(u64),

    #[error("i/o: {0}")]
    Io(#[from] io::Error),

    #[error("result log {}: {source}", .path.display())]
    ResultLog {
        path: PathBuf,
        source: io::Error,
    },
}
