//! # Cowabunga
//!
//! Generic helpers for filtering, mapping, searching, grouping, chunking and
//! membership testing over slices of any element type.
//!
//! Every function borrows its input sequence and never mutates it. Results are
//! either fresh vectors, scalars, `Option<&T>` references into the input, or
//! callback invocations over borrowed sub-slices.
//!
//! ## Operations
//!
//! 1. **Predicate queries** ([`query`])
//!    - `all`, `any` (short-circuiting), `count`, `is_member`, `find`
//!
//! 2. **Transformation** ([`transform`])
//!    - `map`, `filter`, `filter_map`, `flat_map`, `group_by`
//!
//! 3. **Positional / windowing** ([`window`])
//!    - `first`, `last`
//!    - `take`, `drop` (bounds-checked, return [`error::Result`])
//!    - `drop_while`, `drop_leading_while`
//!    - `each_slice` (disjoint chunks), `each_cons` (overlapping windows)
//!
//! 4. **Accumulation** ([`accumulate`])
//!    - `each_with`
//!
//! ## Example
//!
//! ```
//! use cowabunga::{all, each_cons, filter, map, take};
//!
//! let strs = ["foo", "bar", "baz"];
//! assert!(all(&strs, |s| s.len() == 3));
//! assert_eq!(map(&strs, |s| s.to_uppercase()), vec!["FOO", "BAR", "BAZ"]);
//! assert_eq!(filter(&strs, |s| s.starts_with('b')), vec!["bar", "baz"]);
//!
//! let ints = [1, 2, 3];
//! assert_eq!(take(&ints, 2), Ok(vec![1, 2]));
//! assert!(take(&ints, 4).is_err());
//!
//! let mut windows = Vec::new();
//! each_cons(&ints, 2, |w| windows.push(w.to_vec())).unwrap();
//! assert_eq!(windows, vec![vec![1, 2], vec![2, 3]]);
//! ```

pub mod accumulate;
pub mod error;
pub mod query;
pub mod transform;
pub mod window;

pub use accumulate::each_with;
pub use error::SeqError;
pub use query::{all, any, count, find, is_member};
pub use transform::{filter, filter_map, flat_map, group_by, map};
pub use window::{drop, drop_leading_while, drop_while, each_cons, each_slice, first, last, take};
