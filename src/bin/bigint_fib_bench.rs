use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bigint_fib_bench::backend;
use bigint_fib_bench::error::BenchError;
use bigint_fib_bench::gate;
use bigint_fib_bench::generator::Strategy;
use bigint_fib_bench::runner::{self, RunConfig};
use bigint_fib_bench::schema::{BenchReport, RunMeta};
use bigint_fib_bench::sink::{FileSink, NullSink, ResultSink};
use bigint_fib_bench::BackendSelect;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Recompute,
    AccumulateSwap,
}

impl From<StrategyArg> for Strategy {
    fn from(v: StrategyArg) -> Self {
        match v {
            StrategyArg::Recompute => Strategy::Recompute,
            StrategyArg::AccumulateSwap => Strategy::AccumulateSwap,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bigint-fib-bench")]
#[command(about = "Benchmark BigInt backends on iterative Fibonacci (append-only CSV results log)")]
struct Args {
    /// Repetitions per input size per backend.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    repeat_count: u64,

    /// Which backend(s) to run.
    #[arg(long, value_enum, default_value_t = BackendSelect::All)]
    backend: BackendSelect,

    /// Update strategy exercised by the timed matrix.
    #[arg(long, value_enum, default_value_t = StrategyArg::Recompute)]
    strategy: StrategyArg,

    /// Results log appended to on every run.
    #[arg(long, default_value = "results.txt", value_name = "FILE")]
    results: PathBuf,

    /// Print values and timings only; leave the results log untouched.
    #[arg(long, default_value_t = false)]
    no_log: bool,

    /// Where to write a JSON report. If omitted, no report is produced.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn now_utc() -> String {
    // Avoid a chrono dependency; good enough for report provenance.
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("unix:{secs}")
}

fn run(args: &Args) -> Result<(), BenchError> {
    let strategy = Strategy::from(args.strategy);
    let backends: Vec<_> = backend::registry()
        .into_iter()
        .filter(|b| args.backend.matches(b.name()))
        .collect();

    gate::verify_all(&backends)?;

    let cfg = RunConfig::new(args.repeat_count, strategy);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let measurements = runner::run(&cfg, &backends, &mut out)?;
    out.flush()?;

    if args.no_log {
        NullSink.persist(&measurements)?;
    } else {
        FileSink::new(&args.results).persist(&measurements)?;
    }

    if let Some(path) = &args.out {
        let report = BenchReport {
            run: RunMeta {
                schema_version: 1,
                bench_version: env!("CARGO_PKG_VERSION").to_string(),
                repeat: args.repeat_count,
                strategy: strategy.as_str().to_string(),
                timestamp_utc: now_utc(),
            },
            measurements,
        };
        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        fs::write(path, json)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bigint-fib-bench: {e}");
            ExitCode::FAILURE
        }
    }
}
