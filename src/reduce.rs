//! Overflow-safe reductions over integer sequences.
//!
//! The accumulator is checked before every step; a reduction either returns
//! the exact result or an error, never a wrapped or partial value.

use crate::error::Error;

/// Sums `values` into an `i64` accumulator, failing on overflow in either
/// direction. The empty sum is `0`.
pub fn sum<T>(values: &[T]) -> Result<i64, Error>
where
    T: Copy + Into<i64>,
{
    let mut acc: i64 = 0;
    for &value in values {
        acc = acc.checked_add(value.into()).ok_or(Error::Overflow)?;
    }
    Ok(acc)
}

/// Arithmetic mean of `values`. Fails on an empty sequence (an undefined
/// average is not a zero) and propagates sum overflow.
pub fn average<T>(values: &[T]) -> Result<f64, Error>
where
    T: Copy + Into<i64>,
{
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }
    Ok(sum(values)? as f64 / values.len() as f64)
}

/// Largest element of `values`; fails on an empty sequence.
pub fn max<T: Ord + Copy>(values: &[T]) -> Result<T, Error> {
    let (first, rest) = values.split_first().ok_or(Error::EmptySequence)?;
    let mut best = *first;
    for &value in rest {
        if value > best {
            best = value;
        }
    }
    Ok(best)
}

/// Smallest element of `values`; fails on an empty sequence.
pub fn min<T: Ord + Copy>(values: &[T]) -> Result<T, Error> {
    let (first, rest) = values.split_first().ok_or(Error::EmptySequence)?;
    let mut best = *first;
    for &value in rest {
        if value < best {
            best = value;
        }
    }
    Ok(best)
}
