//! Iterative Fibonacci over any [`Natural`] backend.
//!
//! Index-shifted convention: `fib(1) = 0`, `fib(2) = 1`. O(n) additions,
//! two running slots, no recursion and no memoization.

use crate::backend::Natural;
use crate::error::BenchError;

/// How the two running slots are advanced each step. Both strategies
/// produce identical values; the in-place variant exists to avoid one
/// temporary allocation per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// `next = previous + current`, then shift the pair.
    Recompute,
    /// `previous += current`, then exchange the two roles.
    AccumulateSwap,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Recompute => "recompute",
            Strategy::AccumulateSwap => "accumulate-swap",
        }
    }
}

/// Compute the n-th Fibonacci number. `n == 0` is a caller error and
/// fails without producing a value.
pub fn fib<N: Natural>(n: u64, strategy: Strategy) -> Result<N, BenchError> {
    if n == 0 {
        return Err(BenchError::Precondition(n));
    }
    if n == 1 {
        return Ok(N::zero());
    }

    let mut previous = N::zero();
    let mut current = N::one();

    match strategy {
        Strategy::Recompute => {
            for _ in 2..=n {
                let next = previous.add(&current);
                previous = current;
                current = next;
            }
        }
        Strategy::AccumulateSwap => {
            for _ in 2..=n {
                previous.add_assign(&current);
                std::mem::swap(&mut previous, &mut current);
            }
        }
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn index_shift() {
        assert_eq!(fib::<BigUint>(1, Strategy::Recompute).unwrap().to_string(), "0");
        assert_eq!(fib::<BigUint>(2, Strategy::Recompute).unwrap().to_string(), "1");
        assert_eq!(fib::<BigUint>(3, Strategy::Recompute).unwrap().to_string(), "1");
        assert_eq!(fib::<BigUint>(10, Strategy::Recompute).unwrap().to_string(), "34");
    }

    #[test]
    fn zero_index_is_an_error() {
        let err = fib::<BigUint>(0, Strategy::Recompute).unwrap_err();
        assert!(matches!(err, BenchError::Precondition(0)));

        let err = fib::<BigUint>(0, Strategy::AccumulateSwap).unwrap_err();
        assert!(matches!(err, BenchError::Precondition(0)));
    }

    #[test]
    fn additivity() {
        for n in [3u64, 4, 7, 50, 200] {
            let a: BigUint = fib(n - 2, Strategy::Recompute).unwrap();
            let b: BigUint = fib(n - 1, Strategy::Recompute).unwrap();
            let c: BigUint = fib(n, Strategy::Recompute).unwrap();
            assert_eq!(&a + &b, c, "fib({n})");
        }
    }

    #[test]
    fn strategies_are_equivalent() {
        for n in [1u64, 2, 3, 1000, 10_000] {
            let recompute: BigUint = fib(n, Strategy::Recompute).unwrap();
            let in_place: BigUint = fib(n, Strategy::AccumulateSwap).unwrap();
            assert_eq!(recompute.to_string(), in_place.to_string(), "fib({n})");
        }
    }

    #[test]
    fn strategies_are_equivalent_across_backends() {
        for n in [1u64, 2, 3, 1000] {
            let a = fib::<ibig::UBig>(n, Strategy::Recompute).unwrap().to_string();
            let b = fib::<ibig::UBig>(n, Strategy::AccumulateSwap).unwrap().to_string();
            assert_eq!(a, b, "ibig fib({n})");

            let a = fib::<dashu_int::UBig>(n, Strategy::Recompute).unwrap().to_string();
            let b = fib::<dashu_int::UBig>(n, Strategy::AccumulateSwap).unwrap().to_string();
            assert_eq!(a, b, "dashu fib({n})");
        }
    }
}
