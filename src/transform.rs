//! Transformations that build a new sequence (or grouping) from an input
//! sequence, leaving the input untouched.

use itertools::Itertools;
use std::collections::HashMap;
use std::hash::Hash;

/// Applies `f` to every element, preserving order and length.
pub fn map<T, K, F>(seq: &[T], f: F) -> Vec<K>
where
    F: FnMut(&T) -> K,
{
    seq.iter().map(f).collect()
}

/// Clones the elements satisfying `pred` into a new vector, in order.
pub fn filter<T, F>(seq: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|&el| pred(el)).cloned().collect()
}

/// Single-pass map that keeps only the `Some` results of `f`.
pub fn filter_map<T, K, F>(seq: &[T], f: F) -> Vec<K>
where
    F: FnMut(&T) -> Option<K>,
{
    seq.iter().filter_map(f).collect()
}

/// Concatenates the sequences produced by `f`, flattening one level.
pub fn flat_map<T, K, I, F>(seq: &[T], f: F) -> Vec<K>
where
    I: IntoIterator<Item = K>,
    F: FnMut(&T) -> I,
{
    seq.iter().flat_map(f).collect()
}

/// Partitions the elements by `key_fn`.
///
/// Each element lands in exactly one group and keeps its relative order
/// inside that group. The order in which keys are visited is unspecified.
pub fn group_by<T, K, F>(seq: &[T], key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    seq.iter().cloned().into_group_map_by(key_fn)
}
