//! BigInt capability seam.
//!
//! Every backend under comparison is an arbitrary-precision non-negative
//! integer type from a third-party crate, adapted through the [`Natural`]
//! trait. The timed code paths only ever see this surface: construction
//! from a small literal, addition, in-place accumulation, and exact
//! decimal rendering via `Display`.

use std::fmt::Display;
use std::marker::PhantomData;

use crate::error::BenchError;
use crate::generator::{self, Strategy};

/// Minimal arithmetic surface a BigInt crate has to offer.
pub trait Natural: Clone + Display {
    fn zero() -> Self;
    fn one() -> Self;

    /// `self + rhs` as a fresh value.
    fn add(&self, rhs: &Self) -> Self;

    /// `self += rhs` without allocating a temporary, where the crate
    /// supports it.
    fn add_assign(&mut self, rhs: &Self);
}

impl Natural for num_bigint::BigUint {
    fn zero() -> Self {
        num_traits::Zero::zero()
    }

    fn one() -> Self {
        num_traits::One::one()
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn add_assign(&mut self, rhs: &Self) {
        *self += rhs;
    }
}

impl Natural for ibig::UBig {
    fn zero() -> Self {
        ibig::UBig::from(0u8)
    }

    fn one() -> Self {
        ibig::UBig::from(1u8)
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn add_assign(&mut self, rhs: &Self) {
        *self += rhs;
    }
}

impl Natural for dashu_int::UBig {
    fn zero() -> Self {
        dashu_int::UBig::from(0u8)
    }

    fn one() -> Self {
        dashu_int::UBig::from(1u8)
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn add_assign(&mut self, rhs: &Self) {
        *self += rhs;
    }
}

/// A generator result held behind type erasure until the timed print step
/// asks for its canonical decimal form.
pub trait DecimalValue {
    fn to_decimal(&self) -> String;
}

impl<N: Natural> DecimalValue for N {
    fn to_decimal(&self) -> String {
        self.to_string()
    }
}

/// Object-safe handle for one registered backend. The runner is generic
/// over this and must not special-case any backend except for its label.
pub trait Backend {
    fn name(&self) -> &'static str;

    fn fib(&self, n: u64, strategy: Strategy) -> Result<Box<dyn DecimalValue>, BenchError>;
}

struct NaturalBackend<N> {
    name: &'static str,
    _marker: PhantomData<fn() -> N>,
}

impl<N> NaturalBackend<N> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }
}

impl<N: Natural + 'static> Backend for NaturalBackend<N> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fib(&self, n: u64, strategy: Strategy) -> Result<Box<dyn DecimalValue>, BenchError> {
        let value: N = generator::fib(n, strategy)?;
        Ok(Box::new(value))
    }
}

/// The fixed backend registry. Registration order defines trial order and
/// is deliberately not alphabetical; the sink applies its own sort key.
pub fn registry() -> Vec<Box<dyn Backend>> {
    vec![
        Box::new(NaturalBackend::<num_bigint::BigUint>::new("num-bigint")),
        Box::new(NaturalBackend::<ibig::UBig>::new("ibig")),
        Box::new(NaturalBackend::<dashu_int::UBig>::new("dashu")),
    ]
}
