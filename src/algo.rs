//! Sorting algorithms over `i32` slices.
//!
//! Every sorter transforms its slice in place into non-decreasing order:
//! - **Quadratic**: [`bubble_sort`], [`insertion_sort`], [`selection_sort`].
//! - **Divide and conquer**: [`quick_sort`] (Hoare partition), [`merge_sort`].
//! - **Heap based**: [`heap_sort`].
//! - **Radix**: [`radix_sort`] is the legacy stub and does NOT sort; [`lsd_radix_sort`] is
//!   the working replacement enabled for dispatch by the `lsd-radix` feature.
//!
//! Indexing is bounds checked. An out-of-range access is a bug and panics.

use cuneiform::cuneiform;

/// Bubble sort with a shrinking boundary.
///
/// After each pass the unsorted prefix ends at the position of the last swap, so
/// already-placed tails are never rescanned.
///
/// ```
/// use sortbench::algo::bubble_sort;
///
/// let mut data = [3, 1, 4, 1, 5];
/// bubble_sort(&mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn bubble_sort(data: &mut [i32]) {
    let mut unsorted = data.len();
    let mut last_swap = 0;
    loop {
        let mut swapped = false;
        for i in 1..unsorted {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                swapped = true;
                last_swap = i;
            }
        }
        unsorted = last_swap;
        if !swapped {
            break;
        }
    }
}

/// Insertion sort by successive adjacent swaps.
pub fn insertion_sort(data: &mut [i32]) {
    for current in 1..data.len() {
        let mut i = current;
        while i > 0 && data[i - 1] > data[i] {
            data.swap(i - 1, i);
            i -= 1;
        }
    }
}

/// Selection sort. Ties keep the earliest minimum.
pub fn selection_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }

    for i in 0..data.len() - 1 {
        let mut min = i;
        for j in i + 1..data.len() {
            if data[j] < data[min] {
                min = j;
            }
        }
        data.swap(min, i);
    }
}

/// Recursive quicksort using the Hoare partition scheme.
///
/// The pivot is the value at the middle of the current range.
///
/// ```
/// use sortbench::algo::quick_sort;
///
/// let mut data = [2, 1];
/// quick_sort(&mut data);
/// assert_eq!(data, [1, 2]);
/// ```
pub fn quick_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    quick_sort_range(data, 0, data.len() - 1);
}

fn quick_sort_range(data: &mut [i32], low: usize, high: usize) {
    if low < high {
        let split = hoare_partition(data, low, high);
        quick_sort_range(data, low, split);
        quick_sort_range(data, split + 1, high);
    }
}

/// Partitions `data[low..=high]` and returns the split point.
///
/// Both scans are unguarded: they stop because the pivot value itself lies in the range.
/// On return every element of `low..=split` is `<=` every element of `split + 1..=high`.
fn hoare_partition(data: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = data[low + (high - low) / 2];
    let mut i = low;
    let mut j = high;
    loop {
        while data[i] < pivot {
            i += 1;
        }
        while pivot < data[j] {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Top-down merge sort.
///
/// Ranges of at most two elements are settled with a single compare-and-swap instead of
/// recursing further. Each merge copies its two halves into temporaries that are dropped
/// when the merge returns.
///
/// ```
/// use sortbench::algo::merge_sort;
///
/// let mut data = [5, -2, 9, 0, -2];
/// merge_sort(&mut data);
/// assert_eq!(data, [-2, -2, 0, 5, 9]);
/// ```
pub fn merge_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    merge_sort_range(data, 0, data.len() - 1);
}

fn merge_sort_range(data: &mut [i32], low: usize, high: usize) {
    if high - low > 1 {
        let mid = low + (high - low) / 2;
        merge_sort_range(data, low, mid);
        merge_sort_range(data, mid + 1, high);
        merge(data, low, mid, high);
    } else if data[high] < data[low] {
        data.swap(low, high);
    }
}

/// Merges the sorted runs `low..=mid` and `mid + 1..=high`. Left wins ties.
fn merge(data: &mut [i32], low: usize, mid: usize, high: usize) {
    let left = data[low..=mid].to_vec();
    let right = data[mid + 1..=high].to_vec();

    let (mut l, mut r) = (0, 0);
    let mut out = low;
    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            data[out] = left[l];
            l += 1;
        } else {
            data[out] = right[r];
            r += 1;
        }
        out += 1;
    }

    let rest = if l < left.len() { &left[l..] } else { &right[r..] };
    data[out..out + rest.len()].copy_from_slice(rest);
}

/// Legacy radix sort stub.
///
/// Known defect: this increments the first element (wrapping at `i32::MAX`) and
/// performs no sort. The harness reports it as unsuccessful on nearly every input,
/// which is the behaviour operators have come to expect from selector `6`.
/// Use [`lsd_radix_sort`] for a working radix sort.
///
/// ```
/// use sortbench::algo::radix_sort;
///
/// let mut data = [5, 3, 1];
/// radix_sort(&mut data);
/// assert_eq!(data, [6, 3, 1]);
/// ```
pub fn radix_sort(data: &mut [i32]) {
    if let Some(first) = data.first_mut() {
        *first = first.wrapping_add(1);
    }
}

/// Number of buckets per digit (8-bit digits).
const RADIX_BUCKETS: usize = 256;

/// Number of 8-bit digits in an `i32` key.
const RADIX_PASSES: usize = 4;

// Cache-aligned counts struct.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Maps `i32` onto `u32` preserving order by flipping the sign bit.
#[inline(always)]
fn radix_key(value: i32) -> u32 {
    (value as u32) ^ 0x8000_0000
}

/// Least significant digit radix sort.
///
/// Runs one stable counting pass per byte of the biased key, least significant first,
/// through an auxiliary buffer of the same length. Passes where every key shares the
/// same digit are skipped.
///
/// ```
/// use sortbench::algo::lsd_radix_sort;
///
/// let mut data = [5, -3, 1, i32::MIN, i32::MAX, 0];
/// lsd_radix_sort(&mut data);
/// assert_eq!(data, [i32::MIN, -3, 0, 1, 5, i32::MAX]);
/// ```
pub fn lsd_radix_sort(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }

    let mut buffer = vec![0i32; data.len()];
    for pass in 0..RADIX_PASSES {
        let shift = pass * 8;
        let digit = |v: i32| ((radix_key(v) >> shift) & 0xFF) as usize;

        let mut counts = RadixCounts {
            data: [0; RADIX_BUCKETS],
        };
        let counts = &mut counts.data;

        // 1. Histogram
        data.iter().for_each(|&v| counts[digit(v)] += 1);

        if counts.iter().any(|&c| c == data.len()) {
            continue;
        }

        // 2. Prefix sum into bucket starts
        let mut sum = 0;
        counts.iter_mut().for_each(|count| {
            let c = *count;
            *count = sum;
            sum += c;
        });

        // 3. Stable scatter
        data.iter().for_each(|&v| {
            let d = digit(v);
            buffer[counts[d]] = v;
            counts[d] += 1;
        });

        data.copy_from_slice(&buffer);
    }
}

/// Heap sort over an in-place max-heap.
///
/// The build loop sifts internal nodes from `n / 2 - 1` down to 1 and the root gets one
/// extra sift afterwards, which keeps the exact sequence of swaps of the legacy harness.
///
/// ```
/// use sortbench::algo::heap_sort;
///
/// let mut data = [3, 1, 4, 1, 5];
/// heap_sort(&mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn heap_sort(data: &mut [i32]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let mut index = n / 2 - 1;
    while index != 0 {
        heapify(data, n, index);
        index -= 1;
    }
    heapify(data, n, 0);

    for end in (1..n).rev() {
        data.swap(0, end);
        heapify(data, end, 0);
    }
}

/// Sifts `data[index]` down until the max-heap property holds within `data[..size]`.
fn heapify(data: &mut [i32], size: usize, index: usize) {
    let mut largest = index;
    let left = 2 * index + 1;
    let right = left + 1;

    if left < size && data[left] > data[largest] {
        largest = left;
    }
    if right < size && data[right] > data[largest] {
        largest = right;
    }

    if largest != index {
        data.swap(index, largest);
        heapify(data, size, largest);
    }
}
