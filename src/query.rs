//! Predicate queries: questions asked of every element of a sequence.

/// Returns `true` if every element satisfies `pred`.
///
/// An empty sequence is vacuously `true`. Stops at the first element that
/// fails the predicate.
pub fn all<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for el in seq {
        if !pred(el) {
            return false;
        }
    }
    true
}

/// Returns `true` if at least one element satisfies `pred`.
///
/// `false` for an empty sequence. Stops at the first match.
pub fn any<T, F>(seq: &[T], mut pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for el in seq {
        if pred(el) {
            return true;
        }
    }
    false
}

/// Number of elements satisfying `pred`. Every element is evaluated.
pub fn count<T, F>(seq: &[T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    seq.iter().fold(0, |acc, el| if pred(el) { acc + 1 } else { acc })
}

/// Returns `true` if some element is equal to `value`.
pub fn is_member<T>(seq: &[T], value: &T) -> bool
where
    T: PartialEq,
{
    seq.iter().any(|el| el == value)
}

/// First element satisfying `pred`, or `None` when nothing matches.
pub fn find<T, F>(seq: &[T], mut pred: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    seq.iter().find(|&el| pred(el))
}
