//! # Sortbench
//!
//! `sortbench` is an interactive benchmarking harness for textbook sorting algorithms over a
//! fixed-size buffer of random bounded integers.
//!
//! Each cycle the harness refills its buffer with values drawn uniformly from `-128..=128`,
//! reads a one-character selector from the operator, times exactly one sort call at
//! nanosecond resolution and reports the duration in milliseconds, then verifies that the
//! buffer ended up in non-decreasing order.
//!
//! ## Algorithms
//!
//! | Selector | Algorithm | Extra space |
//! |----------|-----------|-------------|
//! | `1` | [`bubble_sort`] (shrinking boundary) | O(1) |
//! | `2` | [`insertion_sort`] | O(1) |
//! | `3` | [`selection_sort`] | O(1) |
//! | `4` | [`quick_sort`] (Hoare partition, middle pivot) | O(log n) stack |
//! | `5` | [`merge_sort`] | O(n) per merge |
//! | `6` | [`radix_sort`] (**known defect**, see below) | O(1) |
//! | `7` | [`heap_sort`] | O(1) |
//!
//! Selector `0` prints the freshly randomized buffer. Anything else ends the session.
//!
//! ## Usage
//!
//! The sorters are plain functions over `&mut [i32]`:
//!
//! ```rust
//! use sortbench::prelude::*;
//!
//! let mut data = vec![3, 1, 4, 1, 5];
//! bubble_sort(&mut data);
//!
//! assert_eq!(data, vec![1, 1, 3, 4, 5]);
//! assert!(is_sorted(&data));
//! ```
//!
//! The harness is generic over its input and output:
//!
//! ```rust
//! use sortbench::harness::{Harness, HarnessConfig};
//!
//! let config = HarnessConfig { len: 32, seed: Some(42), print_sorted: false };
//! let mut harness = Harness::new(config, "1\n5\n7\nq\n".as_bytes(), Vec::<u8>::new()).unwrap();
//! let summary = harness.run().unwrap();
//!
//! assert_eq!(summary.cycles, 3);
//! assert_eq!(summary.successful, 3);
//! ```
//!
//! ## Radix sort
//!
//! [`radix_sort`] only increments the first element and never sorts. The harness keeps
//! dispatching selector `6` to it so the defect stays visible as `[RESULT]: unsuccessful`.
//! Building with the `lsd-radix` feature routes selector `6` to [`lsd_radix_sort`] instead.

pub mod algo;
pub mod core;
pub mod error;
pub mod harness;
pub mod timer;

pub use crate::algo::{
    bubble_sort, heap_sort, insertion_sort, lsd_radix_sort, merge_sort, quick_sort, radix_sort,
    selection_sort,
};
pub use crate::core::{Algorithm, RandomSource, Selector, is_sorted};
pub use crate::error::{HarnessError, Result};

pub mod prelude {
    pub use crate::algo::{
        bubble_sort, heap_sort, insertion_sort, lsd_radix_sort, merge_sort, quick_sort,
        radix_sort, selection_sort,
    };
    pub use crate::core::{Algorithm, RandomSource, Selector, is_sorted};
    pub use crate::harness::{Harness, HarnessConfig};
}
