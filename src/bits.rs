//! Bit manipulation.
//!
//! A power of two has exactly one set bit, so `n & (n - 1)` clears it to
//! zero. Powers of 4, 8 and 16 are powers of two whose single bit sits at a
//! position divisible by 2, 3 and 4 respectively; a mask of those positions
//! checks that.

use std::io::{self, Write};
use tracing::instrument;

/// Mask with every bit whose position is a multiple of `step` set.
const fn residue_mask(step: u32) -> u64 {
    let mut mask = 0u64;
    let mut bit = 0;
    while bit < 64 {
        mask |= 1 << bit;
        bit += step;
    }
    mask
}

const POWER_OF_FOUR_MASK: u64 = residue_mask(2);
const POWER_OF_EIGHT_MASK: u64 = residue_mask(3);
const POWER_OF_SIXTEEN_MASK: u64 = residue_mask(4);

/// ```
/// use classic_algos::bits::is_power_of_two;
///
/// assert!(is_power_of_two(16));
/// assert!(!is_power_of_two(15));
/// assert!(!is_power_of_two(0));
/// ```
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

pub fn is_power_of_four(n: i64) -> bool {
    is_power_of_two(n) && (n as u64) & POWER_OF_FOUR_MASK != 0
}

pub fn is_power_of_eight(n: i64) -> bool {
    is_power_of_two(n) && (n as u64) & POWER_OF_EIGHT_MASK != 0
}

pub fn is_power_of_sixteen(n: i64) -> bool {
    is_power_of_two(n) && (n as u64) & POWER_OF_SIXTEEN_MASK != 0
}

/// Smallest power of two `>= n`. `0` maps to `1`; `None` past `2^63`.
pub fn next_power_of_two(n: u64) -> Option<u64> {
    if n <= 1 {
        return Some(1);
    }
    let shift = 64 - (n - 1).leading_zeros();
    1u64.checked_shl(shift)
}

/// Largest power of two `<= n`, or `None` for zero.
pub fn previous_power_of_two(n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Some(1 << (63 - n.leading_zeros()))
}

/// `k` such that `n == 2^k`, only for exact powers of two.
pub fn log2_exponent(n: u64) -> Option<u32> {
    (n != 0 && n & (n - 1) == 0).then(|| n.trailing_zeros())
}

/// Population count by repeatedly clearing the lowest set bit.
pub fn count_set_bits(mut n: u64) -> u32 {
    let mut count = 0;
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

pub fn get_bit(n: u64, pos: u32) -> bool {
    pos < 64 && (n >> pos) & 1 == 1
}

pub fn set_bit(n: u64, pos: u32) -> u64 {
    n | 1u64.checked_shl(pos).unwrap_or(0)
}

pub fn clear_bit(n: u64, pos: u32) -> u64 {
    n & !1u64.checked_shl(pos).unwrap_or(0)
}

pub fn toggle_bit(n: u64, pos: u32) -> u64 {
    n ^ 1u64.checked_shl(pos).unwrap_or(0)
}

/// Value of the lowest set bit (`n & -n`), zero for zero.
pub fn lowest_set_bit(n: u64) -> u64 {
    n & n.wrapping_neg()
}

/// Reverses the bit order of a 32-bit word with swaps of halves, bytes, nibbles, pairs and bits.
pub fn reverse_bits(mut n: u32) -> u32 {
    n = n.rotate_left(16);
    n = ((n & 0xff00_ff00) >> 8) | ((n & 0x00ff_00ff) << 8);
    n = ((n & 0xf0f0_f0f0) >> 4) | ((n & 0x0f0f_0f0f) << 4);
    n = ((n & 0xcccc_cccc) >> 2) | ((n & 0x3333_3333) << 2);
    ((n & 0xaaaa_aaaa) >> 1) | ((n & 0x5555_5555) << 1)
}

/// The one value that appears an odd number of times when all others pair up.
pub fn single_number(data: &[i64]) -> i64 {
    data.iter().fold(0, |acc, &v| acc ^ v)
}

/// The value missing from a permutation of `0..=data.len()` with one gap.
pub fn missing_number(data: &[u64]) -> u64 {
    let expected = (0..=data.len() as u64).fold(0, |acc, v| acc ^ v);
    data.iter().fold(expected, |acc, &v| acc ^ v)
}

/// Number of differing bits.
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    count_set_bits(a ^ b)
}

/// Reflected Gray code sequence for `bits`-bit words.
pub fn gray_code(bits: u32) -> Vec<u64> {
    if bits >= 64 {
        return vec![];
    }
    (0..1u64 << bits).map(|i| i ^ (i >> 1)).collect()
}

/// All subsets of `items`, enumerated by bitmask; subset `m` holds item `i` when bit `i` of `m` is set.
///
/// Returns an empty list if there are too many items to enumerate.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() >= usize::BITS as usize {
        return vec![];
    }
    (0..1usize << items.len())
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1usize << *i) != 0)
                .map(|(_, item)| item.clone())
                .collect()
        })
        .collect()
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    for n in [0, 1, 15, 16, 64, 4096, -8] {
        writeln!(
            out,
            "{n:>5}: pow2={} pow4={} pow8={} pow16={}",
            is_power_of_two(n),
            is_power_of_four(n),
            is_power_of_eight(n),
            is_power_of_sixteen(n)
        )?;
    }

    for n in [0u64, 5, 17, 1024] {
        writeln!(
            out,
            "{n:>5}: next={:?} previous={:?} log2={:?}",
            next_power_of_two(n),
            previous_power_of_two(n),
            log2_exponent(n)
        )?;
    }

    let n = 0b1011_0100u64;
    writeln!(out, "n = {n:#010b}")?;
    writeln!(out, "set bits:     {}", count_set_bits(n))?;
    writeln!(out, "bit 2 set:    {}", get_bit(n, 2))?;
    writeln!(out, "set bit 0:    {:#010b}", set_bit(n, 0))?;
    writeln!(out, "clear bit 7:  {:#010b}", clear_bit(n, 7))?;
    writeln!(out, "toggle bit 1: {:#010b}", toggle_bit(n, 1))?;
    writeln!(out, "lowest bit:   {:#010b}", lowest_set_bit(n))?;
    writeln!(out, "reverse_bits(1): {:#x}", reverse_bits(1))?;
    writeln!(
        out,
        "single number in [4, 1, 2, 1, 2]: {}",
        single_number(&[4, 1, 2, 1, 2])
    )?;
    writeln!(
        out,
        "missing from [3, 0, 1]: {}",
        missing_number(&[3, 0, 1])
    )?;
    writeln!(out, "hamming(1, 4): {}", hamming_distance(1, 4))?;
    writeln!(out, "gray code (3 bits): {:?}", gray_code(3))?;
    writeln!(out, "subsets of [a, b, c]: {:?}", subsets(&['a', 'b', 'c']))?;
    Ok(())
}
