//! The benchmark runner: drives the size × repetition × backend matrix
//! and times each trial's two sub-steps.

use std::io::Write;

use log::debug;

use crate::backend::Backend;
use crate::error::BenchError;
use crate::generator::Strategy;
use crate::harness::measure;
use crate::schema::Measurement;

/// The fixed input-size matrix, in trial order.
pub const INPUT_SIZES: [u64; 5] = [10_000, 30_000, 100_000, 300_000, 1_000_000];

#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Repetitions per (size, backend) pair. Must be at least 1.
    pub repeat: u64,
    /// Fibonacci indices, outermost loop, applied in order.
    pub sizes: Vec<u64>,
    /// Update strategy exercised by the timed matrix.
    pub strategy: Strategy,
}

impl RunConfig {
    pub fn new(repeat: u64, strategy: Strategy) -> Self {
        Self {
            repeat,
            sizes: INPUT_SIZES.to_vec(),
            strategy,
        }
    }
}

/// Run every trial and return the measurements in completion order
/// (unsorted; ordering is the sink's concern).
///
/// Each trial times the generator call, then times rendering the value to
/// decimal and writing it to `out`, with no work in between. Any failure
/// propagates immediately.
pub fn run(
    cfg: &RunConfig,
    backends: &[Box<dyn Backend>],
    out: &mut dyn Write,
) -> Result<Vec<Measurement>, BenchError> {
    if cfg.repeat == 0 {
        return Err(BenchError::Config("repeat count must be at least 1".into()));
    }
    if cfg.sizes.is_empty() {
        return Err(BenchError::Config("input size matrix is empty".into()));
    }

    let mut measurements =
        Vec::with_capacity(cfg.sizes.len() * cfg.repeat as usize * backends.len());

    for &size in &cfg.sizes {
        for rep in 0..cfg.repeat {
            for backend in backends {
                debug!("trial size={size} rep={rep} backend={}", backend.name());

                let (value, compute) = measure(|| backend.fib(size, cfg.strategy));
                let value = value?;

                let (written, print) = measure(|| writeln!(out, "{}", value.to_decimal()));
                written?;

                measurements.push(Measurement {
                    backend: backend.name().to_string(),
                    input_size: size,
                    compute_s: compute.as_secs_f64(),
                    print_s: print.as_secs_f64(),
                });
            }
        }
    }

    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::registry;
    use crate::sink::{FileSink, ResultSink};
    use tempfile::tempdir;

    fn reduced_config() -> RunConfig {
        RunConfig {
            repeat: 1,
            sizes: vec![10_000],
            strategy: Strategy::Recompute,
        }
    }

    #[test]
    fn rejects_zero_repeat() {
        let cfg = RunConfig {
            repeat: 0,
            ..reduced_config()
        };
        let mut out: Vec<u8> = Vec::new();
        let err = run(&cfg, &registry(), &mut out).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn rejects_empty_matrix() {
        let cfg = RunConfig {
            sizes: vec![],
            ..reduced_config()
        };
        let mut out: Vec<u8> = Vec::new();
        let err = run(&cfg, &registry(), &mut out).unwrap_err();
        assert!(matches!(err, BenchError::Config(_)));
    }

    #[test]
    fn trial_order_is_size_then_rep_then_backend() {
        let cfg = RunConfig {
            repeat: 2,
            sizes: vec![100, 200],
            strategy: Strategy::Recompute,
        };
        let backends = registry();
        let mut out: Vec<u8> = Vec::new();
        let measurements = run(&cfg, &backends, &mut out).unwrap();

        let order: Vec<_> = measurements
            .iter()
            .map(|m| (m.input_size, m.backend.as_str()))
            .collect();
        assert_eq!(
            order,
            [
                (100, "num-bigint"),
                (100, "ibig"),
                (100, "dashu"),
                (100, "num-bigint"),
                (100, "ibig"),
                (100, "dashu"),
                (200, "num-bigint"),
                (200, "ibig"),
                (200, "dashu"),
                (200, "num-bigint"),
                (200, "ibig"),
                (200, "dashu"),
            ]
        );
    }

    #[test]
    fn printed_output_is_the_decimal_value() {
        let cfg = RunConfig {
            repeat: 1,
            sizes: vec![10],
            strategy: Strategy::Recompute,
        };
        let backends: Vec<_> = registry().into_iter().take(1).collect();
        let mut out = Vec::new();
        run(&cfg, &backends, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "34\n");
    }

    #[test]
    fn end_to_end_reduced_matrix() {
        let backends: Vec<_> = registry().into_iter().take(2).collect();
        let mut out: Vec<u8> = Vec::new();
        let measurements = run(&reduced_config(), &backends, &mut out).unwrap();

        assert_eq!(measurements.len(), 2);
        for m in &measurements {
            assert_eq!(m.input_size, 10_000);
            assert!(m.compute_s >= 0.0);
            assert!(m.print_s >= 0.0);
        }

        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        FileSink::new(&path).persist(&measurements).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
