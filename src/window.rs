//! Positional and windowing operations.
//!
//! Counts and sizes are `isize`; negative values are reported as `SeqError`.

use crate::error::{checked_count, checked_size, Result};
use crate::query::count;

/// Element at index 0, or `None` for an empty sequence.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Element at the highest index, or `None` for an empty sequence.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The first `n` elements.
///
/// Fails with [`SeqError::OutOfBounds`](crate::SeqError::OutOfBounds) unless
/// `0 <= n <= seq.len()`.
pub fn take<T: Clone>(seq: &[T], n: isize) -> Result<Vec<T>> {
    let n = checked_count(n, seq.len())?;
    Ok(seq.iter().take(n).cloned().collect())
}

/// Everything after the first `n` elements. Same bounds as [`take`].
pub fn drop<T: Clone>(seq: &[T], n: isize) -> Result<Vec<T>> {
    let n = checked_count(n, seq.len())?;
    Ok(seq.iter().skip(n).cloned().collect())
}

/// Drops as many elements from the front as there are elements satisfying
/// `pred` anywhere in the sequence.
///
/// This is not the usual "skip the leading run": with `[1, 5, 2]` and
/// `n < 3`, two elements match, so `[2]` is returned even though `5`
/// breaks the run. Use [`drop_leading_while`] for the leading-run behaviour.
pub fn drop_while<T, F>(seq: &[T], pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let matches = count(seq, pred);
    seq.iter().skip(matches).cloned().collect()
}

/// Skips the leading run of elements satisfying `pred` and returns the rest.
pub fn drop_leading_while<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().skip_while(|&el| pred(el)).cloned().collect()
}

/// Calls `f` once per disjoint chunk of `n` elements, in order.
///
/// The last chunk is shorter when `n` does not divide the length. Fails with
/// [`SeqError::InvalidSize`](crate::SeqError::InvalidSize) when `n <= 0`,
/// before `f` is ever called.
pub fn each_slice<T, F>(seq: &[T], n: isize, mut f: F) -> Result<()>
where
    F: FnMut(&[T]),
{
    let size = checked_size(n)?;
    for chunk in seq.chunks(size) {
        f(chunk);
    }
    Ok(())
}

/// Calls `f` once per overlapping window of exactly `n` elements.
///
/// A sequence shorter than `n` yields no windows. `n <= 0` is rejected like
/// in [`each_slice`].
pub fn each_cons<T, F>(seq: &[T], n: isize, mut f: F) -> Result<()>
where
    F: FnMut(&[T]),
{
    let size = checked_size(n)?;
    for window in seq.windows(size) {
        f(window);
    }
    Ok(())
}
