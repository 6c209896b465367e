//! Correctness gate: every registered backend must reproduce a known
//! reference value, under both update strategies, before a single trial
//! is timed. A mismatch aborts the whole run.

use log::{debug, info};

use crate::backend::Backend;
use crate::error::BenchError;
use crate::generator::Strategy;

/// Index the gate evaluates.
pub const REFERENCE_INDEX: u64 = 1000;

/// fib(1000) under the index-shifted convention, 209 decimal digits.
pub const REFERENCE_DECIMAL: &str = "43466557686937456435688527675040625802564660517371780402481729089536555417949051890403879840079255169295922593080322634775209689623239873322471161642996440906533187938298969649928516003704476137795166849228875";

const STRATEGIES: [Strategy; 2] = [Strategy::Recompute, Strategy::AccumulateSwap];

pub fn verify_all(backends: &[Box<dyn Backend>]) -> Result<(), BenchError> {
    for backend in backends {
        for strategy in STRATEGIES {
            let value = backend.fib(REFERENCE_INDEX, strategy)?;
            if value.to_decimal() != REFERENCE_DECIMAL {
                return Err(BenchError::Correctness {
                    backend: backend.name().to_string(),
                    strategy: strategy.as_str(),
                    index: REFERENCE_INDEX,
                });
            }
        }
        debug!("gate passed: {}", backend.name());
    }

    info!("correctness gate passed for {} backend(s)", backends.len());
    Ok(())
}
