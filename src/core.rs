//! Core types for the benchmark harness.
//!
//! This module defines:
//! - Buffer constants: the default length and the value range of generated elements.
//! - [`RandomSource`]: fills a buffer with uniformly distributed bounded integers.
//! - [`is_sorted`]: the verifier run after every sort.
//! - [`Algorithm`] and [`Selector`]: the closed set of operations an operator can pick.

use crate::algo;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default number of elements in the harness buffer.
pub const BUFFER_LEN: usize = i16::MAX as usize;

/// Smallest value produced by [`RandomSource`].
pub const VALUE_MIN: i32 = i8::MIN as i32;

/// Largest value produced by [`RandomSource`] (inclusive).
pub const VALUE_MAX: i32 = i8::MAX as i32 + 1;

/// Fills buffers with integers drawn uniformly from `VALUE_MIN..=VALUE_MAX`.
///
/// A clock-seeded source reseeds from the high-resolution clock on every fill, so
/// repeated cycles see different permutations. A fixed-seed source keeps a single
/// generator alive and advances it across fills, which makes whole runs reproducible.
///
/// # Examples
///
/// ```
/// use sortbench::core::{RandomSource, VALUE_MAX, VALUE_MIN};
///
/// let mut source = RandomSource::with_seed(7);
/// let mut buffer = vec![0; 64];
/// source.fill(&mut buffer);
///
/// assert!(buffer.iter().all(|v| (VALUE_MIN..=VALUE_MAX).contains(v)));
/// ```
#[derive(Debug)]
pub enum RandomSource {
    Clock,
    Seeded(StdRng),
}

impl RandomSource {
    /// A source that reseeds from the clock on every fill.
    pub fn from_clock() -> Self {
        RandomSource::Clock
    }

    /// A deterministic source seeded once from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        RandomSource::Seeded(StdRng::seed_from_u64(seed))
    }

    /// Overwrites every slot of `buffer` with an independent draw.
    pub fn fill(&mut self, buffer: &mut [i32]) {
        match self {
            RandomSource::Clock => {
                let seed = clock_seed();
                debug!("Filling {} elements from clock seed {}", buffer.len(), seed);
                fill_from(&mut StdRng::seed_from_u64(seed), buffer);
            }
            RandomSource::Seeded(rng) => {
                debug!("Filling {} elements from seeded generator", buffer.len());
                fill_from(rng, buffer);
            }
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        RandomSource::from_clock()
    }
}

fn fill_from<R: Rng>(rng: &mut R, buffer: &mut [i32]) {
    buffer
        .iter_mut()
        .for_each(|slot| *slot = rng.random_range(VALUE_MIN..=VALUE_MAX));
}

// Nanoseconds since the epoch, truncated. A clock before the epoch still yields a seed.
fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as u64,
        Err(before) => before.duration().as_nanos() as u64,
    }
}

/// Returns `true` if every element is less than or equal to its successor.
///
/// Empty and single-element slices are trivially sorted.
///
/// ```
/// use sortbench::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2]));
/// assert!(!is_sorted(&[6, 3, 1]));
/// assert!(is_sorted(&[]));
/// ```
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// The sorting algorithms the harness can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Radix,
    Heap,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Radix,
        Algorithm::Heap,
    ];

    /// Human readable name printed before the timer line.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Sorts `data` in place with this algorithm.
    ///
    /// [`Algorithm::Radix`] runs the legacy stub unless the `lsd-radix` feature is enabled.
    pub fn sort(self, data: &mut [i32]) {
        match self {
            Algorithm::Bubble => algo::bubble_sort(data),
            Algorithm::Insertion => algo::insertion_sort(data),
            Algorithm::Selection => algo::selection_sort(data),
            Algorithm::Quick => algo::quick_sort(data),
            Algorithm::Merge => algo::merge_sort(data),
            #[cfg(not(feature = "lsd-radix"))]
            Algorithm::Radix => algo::radix_sort(data),
            #[cfg(feature = "lsd-radix")]
            Algorithm::Radix => algo::lsd_radix_sort(data),
            Algorithm::Heap => algo::heap_sort(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One operation code read from the operator per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// `'0'`: dump the freshly randomized buffer without sorting.
    Print,
    /// `'1'..='7'`: run the corresponding algorithm.
    Sort(Algorithm),
    /// Anything else ends the session.
    Terminate,
}

impl From<char> for Selector {
    fn from(code: char) -> Self {
        match code {
            '0' => Selector::Print,
            '1' => Selector::Sort(Algorithm::Bubble),
            '2' => Selector::Sort(Algorithm::Insertion),
            '3' => Selector::Sort(Algorithm::Selection),
            '4' => Selector::Sort(Algorithm::Quick),
            '5' => Selector::Sort(Algorithm::Merge),
            '6' => Selector::Sort(Algorithm::Radix),
            '7' => Selector::Sort(Algorithm::Heap),
            _ => Selector::Terminate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_codes_are_contiguous() {
        assert_eq!(Selector::from('0'), Selector::Print);
        for (offset, algorithm) in Algorithm::ALL.iter().enumerate() {
            let code = char::from(b'1' + offset as u8);
            assert_eq!(Selector::from(code), Selector::Sort(*algorithm));
        }
    }

    #[test]
    fn unknown_codes_terminate() {
        for code in ['8', '9', 'q', 'x', '/', ' '] {
            assert_eq!(Selector::from(code), Selector::Terminate);
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = vec![0; 256];
        let mut b = vec![0; 256];
        RandomSource::with_seed(99).fill(&mut a);
        RandomSource::with_seed(99).fill(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_source_advances_between_fills() {
        let mut source = RandomSource::with_seed(1);
        let mut first = vec![0; 512];
        let mut second = vec![0; 512];
        source.fill(&mut first);
        source.fill(&mut second);
        assert_ne!(first, second);
    }

    #[test]
    fn generated_values_cover_both_bounds() {
        let mut buffer = vec![0; BUFFER_LEN];
        RandomSource::with_seed(3).fill(&mut buffer);
        assert!(buffer.iter().all(|v| (VALUE_MIN..=VALUE_MAX).contains(v)));
        assert!(buffer.contains(&VALUE_MIN));
        assert!(buffer.contains(&VALUE_MAX));
    }

    #[test]
    fn verifier_edge_cases() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[i32::MIN]));
        assert!(is_sorted(&[i32::MIN, 0, i32::MAX]));
        assert!(!is_sorted(&[0, -1]));
    }
}
