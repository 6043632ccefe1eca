// Naive recursive Fibonacci
//
// Indexing is shifted from the textbook sequence: fib(1) = 1, fib(2) = 2.
// Only n < -1 is guarded. 0 and -1 have no base case of their own but still
// bottom out in the guard: fib(-1) = fib(-2) + fib(-3) = -2, fib(0) = -3.

use crate::error::AppError;
use crate::scan::scan_i64;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Returned for any input below -1.
pub const INVALID: i64 = -1;

/// Exponential time, recursion depth O(n). Sums wrap on overflow.
pub fn fib(n: i64) -> i64 {
    if n < -1 {
        return INVALID;
    }
    if n == 1 || n == 2 {
        return n;
    }

    let a = fib(n - 1);
    let b = fib(n - 2);
    a.wrapping_add(b)
}

/// Reads one integer from `input`, writes `fib(n)` as a line to `output`.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<i64, AppError> {
    let n = scan_i64(input)?;
    info!(n, "computing fibonacci");

    let value = fib(n);
    debug!(n, value, "done");

    writeln!(output, "{value}")?;
    output.flush()?;
    Ok(value)
}
