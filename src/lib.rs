use clap::ValueEnum;

pub mod backend;
pub mod error;
pub mod gate;
pub mod generator;
pub mod harness;
pub mod runner;
pub mod schema;
pub mod sink;

/// BigInt backend to benchmark.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum BackendSelect {
    /// Run every registered backend.
    #[default]
    All,
    /// num-bigint (`num_bigint::BigUint`) only.
    NumBigint,
    /// ibig (`ibig::UBig`) only.
    Ibig,
    /// dashu (`dashu_int::UBig`) only.
    Dashu,
}

impl BackendSelect {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            BackendSelect::All => true,
            BackendSelect::NumBigint => name == "num-bigint",
            BackendSelect::Ibig => name == "ibig",
            BackendSelect::Dashu => name == "dashu",
        }
    }
}
