// Two-pass statistics over count-prefixed double arguments

use crate::activation::Activation;
use crate::cursor::Cursor;
use crate::{VarargError, VarargResult};

fn checked_count(count: i64) -> VarargResult<usize> {
    match usize::try_from(count) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(VarargError::InvalidArgumentCount { count }),
    }
}

fn sum(cursor: &mut Cursor<'_>, n: usize) -> VarargResult<f64> {
    let mut total = 0.0;
    for _ in 0..n {
        total += cursor.arg::<f64>()?;
    }
    Ok(total)
}

/// Arithmetic mean of the first `count` trailing doubles
pub fn sample_mean(count: i64, va: &Activation) -> VarargResult<f64> {
    let n = checked_count(count)?;
    let mut args = va.start();
    Ok(sum(&mut args, n)? / n as f64)
}

/// Population standard deviation of the first `count` trailing doubles.
///
/// The cursor is duplicated before the first pass; the mean is computed
/// through the first cursor and the squared deviations through the copy, so the
/// values are read twice without restarting.
pub fn sample_stddev(count: i64, va: &Activation) -> VarargResult<f64> {
    let n = checked_count(count)?;

    let mut args1 = va.start();
    let mut args2 = args1.duplicate();

    let mean = sum(&mut args1, n)? / n as f64;
    args1.close();

    let mut sum_sq_diff = 0.0;
    for _ in 0..n {
        let num = args2.arg::<f64>()?;
        sum_sq_diff += (num - mean) * (num - mean);
    }
    args2.close();

    log::debug!("stddev over {} values: mean {}", n, mean);
    Ok((sum_sq_diff / n as f64).sqrt())
}
