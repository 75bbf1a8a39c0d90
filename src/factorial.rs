// 🔢 Factorial - iterative and recursive n!
// Both variants reject negative input and must agree on every n >= 0.

use crate::error::{LabError, LabResult};
use num_bigint::BigUint;
use tracing::debug;

const NEGATIVE_INPUT: &str = "Factorial is not defined for negative numbers";

/// Deepest input the recursive variant accepts before it would risk the stack
pub const MAX_RECURSION_DEPTH: i64 = 5_000;

/// Inputs shown in the demo section of the factorial session
pub const DEMO_INPUTS: [i64; 4] = [0, 1, 5, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialMethod {
    Iterative,
    Recursive,
}

impl FactorialMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorialMethod::Iterative => "iterative",
            FactorialMethod::Recursive => "recursive",
        }
    }

    pub fn compute(&self, n: i64) -> LabResult<BigUint> {
        match self {
            FactorialMethod::Iterative => factorial_iterative(n),
            FactorialMethod::Recursive => factorial_recursive(n),
        }
    }
}

fn check_non_negative(n: i64) -> LabResult<u64> {
    u64::try_from(n).map_err(|_| LabError::InvalidValue(NEGATIVE_INPUT.to_string()))
}

/// n! by multiplying 2..=n
pub fn factorial_iterative(n: i64) -> LabResult<BigUint> {
    let n = check_non_negative(n)?;
    debug!(n, "computing factorial iteratively");

    Ok((2..=n).fold(BigUint::from(1u32), |acc, i| acc * i))
}

/// n! as n * (n-1)!, base case 0! = 1! = 1
pub fn factorial_recursive(n: i64) -> LabResult<BigUint> {
    if n > MAX_RECURSION_DEPTH {
        return Err(LabError::InvalidValue(format!(
            "Recursive factorial is limited to n <= {}",
            MAX_RECURSION_DEPTH
        )));
    }
    let n = check_non_negative(n)?;
    debug!(n, "computing factorial recursively");

    Ok(recurse(n))
}

fn recurse(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::from(1u32)
    } else {
        recurse(n - 1) * n
    }
}
