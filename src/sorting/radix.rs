//! Non-comparison sorts: counting sort, LSD radix sort for `u32`, and an MSD
//! radix sort for byte strings.
//!
//! The byte-string sort distributes keys into 256 buckets on one byte at a
//! time. Each key carries the next 8 bytes of itself in a `KeyCursor`, so a
//! pass reads only the cursors until a bucket is small enough to hand to a
//! comparison sort. Runs of bytes shared by every key in a partition are
//! skipped in one step.

use super::keys::{ByteKeys, KeyCursor, PREFIX_BYTES};
use cuneiform::cuneiform;
use std::cmp::Ordering;
use tracing::trace;

/// Partitions at or below this size are finished with a comparison sort.
const RADIX_THRESHOLD: usize = 64;

/// One bucket per byte value.
const BUCKETS: usize = 256;

// Cache-aligned histogram.
#[cuneiform]
struct BucketCounts {
    data: [usize; BUCKETS],
}

/// Returns the indices that order `keys` lexicographically.
///
/// The input is left untouched. The order is stable: equal keys keep their
/// original relative order.
///
/// # Examples
///
/// ```
/// use classic_algos::sorting::sorted_indices;
///
/// let words = vec!["pear", "apple", "fig"];
/// assert_eq!(sorted_indices(&words), vec![1, 2, 0]);
/// ```
pub fn sorted_indices<K: ByteKeys + ?Sized>(keys: &K) -> Vec<usize> {
    let len = keys.len();
    if len == 0 {
        return vec![];
    }

    let mut cursors: Vec<KeyCursor> = (0..len)
        .map(|index| KeyCursor {
            index,
            prefix: keys.prefix_at(index, 0),
        })
        .collect();

    sort_partition(keys, &mut cursors, 0);

    cursors.into_iter().map(|c| c.index).collect()
}

/// Sorts byte-string items in place with the MSD radix sort.
///
/// ```
/// use classic_algos::sorting::radix_sort_bytes;
///
/// let mut data = vec!["delta", "alpha", "charlie", "bravo"];
/// radix_sort_bytes(&mut data);
/// assert_eq!(data, vec!["alpha", "bravo", "charlie", "delta"]);
/// ```
pub fn radix_sort_bytes<T: AsRef<[u8]>>(data: &mut [T]) {
    let order = sorted_indices(data);
    place_in_order(data, &order);
}

/// Rearranges `data` so that position `i` receives the item at `order[i]`.
///
/// Works from destinations: `target[j]` is where item `j` belongs, and each
/// swap settles one item for good.
fn place_in_order<T>(data: &mut [T], order: &[usize]) {
    let mut target = vec![0; order.len()];
    for (position, &source) in order.iter().enumerate() {
        target[source] = position;
    }
    for i in 0..data.len() {
        while target[i] != i {
            let j = target[i];
            data.swap(i, j);
            target.swap(i, j);
        }
    }
}

/// Sorts `cursors`, all of whose keys agree on their first `shared` bytes.
fn sort_partition<K: ByteKeys + ?Sized>(keys: &K, cursors: &mut [KeyCursor], shared: usize) {
    if cursors.len() <= RADIX_THRESHOLD {
        cursors.sort_by(|a, b| compare_cursors(keys, a, b, shared));
        return;
    }

    let shared = skip_shared_bytes(keys, cursors, shared);
    let counts = bucket_counts(cursors);
    if counts.data.contains(&cursors.len()) {
        // Skipping only halts on a shared zero byte: every key is padded or
        // holds a literal zero here, and another distribution would not split them.
        cursors.sort_by(|a, b| compare_cursors(keys, a, b, shared));
        return;
    }

    trace!(len = cursors.len(), shared, "radix pass");
    distribute(cursors, &counts);

    let mut start = 0;
    for &count in counts.data.iter().filter(|&&count| count > 0) {
        let bucket = &mut cursors[start..start + count];
        refill(keys, bucket, shared + 1);
        sort_partition(keys, bucket, shared + 1);
        start += count;
    }
}

/// Advances past the leading bytes every cursor agrees on and returns the new
/// shared length. Prefixes are shifted, or reloaded once the cached window is used up.
fn skip_shared_bytes<K: ByteKeys + ?Sized>(
    keys: &K,
    cursors: &mut [KeyCursor],
    mut shared: usize,
) -> usize {
    let mut window_used = 0;
    loop {
        let step = common_prefix_len(cursors);
        if step == 0 {
            return shared;
        }
        shared += step;
        window_used += step;
        if window_used >= PREFIX_BYTES {
            refill(keys, cursors, shared);
            window_used = 0;
        } else {
            for cursor in cursors.iter_mut() {
                cursor.prefix <<= step * 8;
            }
        }
    }
}

/// Number of leading prefix bytes identical across `cursors`, stopping before
/// the first zero byte since it may be end-of-key padding.
fn common_prefix_len(cursors: &[KeyCursor]) -> usize {
    let Some(first) = cursors.first() else {
        return 0;
    };
    let differing = cursors
        .iter()
        .map(|cursor| cursor.prefix ^ first.prefix)
        .fold(0, |bits, diff| bits | diff);
    let agreed = (differing.leading_zeros() / 8) as usize;
    first.prefix.to_be_bytes()[..agreed]
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(agreed)
}

/// Histogram of lead bytes.
fn bucket_counts(cursors: &[KeyCursor]) -> BucketCounts {
    let mut counts = BucketCounts { data: [0; BUCKETS] };
    for cursor in cursors {
        counts.data[cursor.lead_byte() as usize] += 1;
    }
    counts
}

/// Stable scatter of `cursors` into contiguous buckets by lead byte.
fn distribute(cursors: &mut [KeyCursor], counts: &BucketCounts) {
    let mut next = [0usize; BUCKETS];
    counts.data.iter().zip(next.iter_mut()).fold(0, |start, (&count, slot)| {
        *slot = start;
        start + count
    });

    let input = cursors.to_vec();
    for cursor in input {
        let slot = &mut next[cursor.lead_byte() as usize];
        cursors[*slot] = cursor;
        *slot += 1;
    }
}

/// Reloads each cursor's prefix starting at byte `offset`.
fn refill<K: ByteKeys + ?Sized>(keys: &K, cursors: &mut [KeyCursor], offset: usize) {
    cursors
        .iter_mut()
        .for_each(|c| c.prefix = keys.prefix_at(c.index, offset));
}

/// Orders two cursors whose keys agree on the first `shared` bytes.
///
/// Prefixes decide most comparisons. On a tie, the key tails from `shared`
/// are compared, and length breaks the remaining tie between a key and the
/// same key followed by zero bytes.
#[inline]
fn compare_cursors<K: ByteKeys + ?Sized>(
    keys: &K,
    a: &KeyCursor,
    b: &KeyCursor,
    shared: usize,
) -> Ordering {
    if a.prefix != b.prefix {
        return a.prefix.cmp(&b.prefix);
    }

    let key_a = keys.key(a.index);
    let key_b = keys.key(b.index);
    let tail_a = key_a.get(shared..).unwrap_or(&[]);
    let tail_b = key_b.get(shared..).unwrap_or(&[]);

    tail_a
        .cmp(tail_b)
        .then_with(|| key_a.len().cmp(&key_b.len()))
}

/// Counting sort for small non-negative integers.
///
/// Uses one counter per value up to the maximum, so it suits dense ranges.
pub fn counting_sort(data: &mut [u32]) {
    let Some(&max) = data.iter().max() else {
        return;
    };

    let mut counts = vec![0usize; max as usize + 1];
    data.iter().for_each(|&v| counts[v as usize] += 1);

    let mut pos = 0;
    for (value, &count) in counts.iter().enumerate() {
        data[pos..pos + count].fill(value as u32);
        pos += count;
    }
}

/// LSD radix sort over the four bytes of each `u32`, least significant first.
pub fn radix_sort_lsd(data: &mut [u32]) {
    if data.len() < 2 {
        return;
    }

    let mut scratch = vec![0u32; data.len()];
    for shift in (0..32).step_by(8) {
        let mut counts = [0usize; BUCKETS];
        data.iter()
            .for_each(|&v| counts[((v >> shift) & 0xff) as usize] += 1);

        // All keys share this byte: the pass would be the identity.
        if counts.iter().any(|&c| c == data.len()) {
            continue;
        }

        let mut offsets = [0usize; BUCKETS];
        let mut sum = 0;
        for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
            *offset = sum;
            sum += count;
        }

        for &v in data.iter() {
            let slot = &mut offsets[((v >> shift) & 0xff) as usize];
            scratch[*slot] = v;
            *slot += 1;
        }
        data.copy_from_slice(&scratch);
    }
}
