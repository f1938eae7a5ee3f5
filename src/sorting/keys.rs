//! Byte-key access for the radix sorts.
//!
//! This module defines:
//! - [`ByteKeys`]: read-only access to a collection of byte-string keys.
//! - `KeyCursor`: an index paired with the next 8 bytes of its key.

use std::collections::VecDeque;

/// Number of key bytes packed into a cursor.
pub const PREFIX_BYTES: usize = 8;

/// An item index plus the next [`PREFIX_BYTES`] bytes of its key, big-endian.
///
/// Comparing two `prefix` values orders the keys on those bytes without
/// touching the keys themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct KeyCursor {
    pub index: usize,
    pub prefix: u64,
}

impl KeyCursor {
    /// Most significant byte of the cached prefix.
    #[inline]
    pub fn lead_byte(&self) -> u8 {
        (self.prefix >> 56) as u8
    }
}

/// Indexed access to byte-string keys without copying them.
///
/// Anything that can hand out `&[u8]` per position can be radix sorted:
/// `Vec<String>`, `Vec<Vec<u8>>`, or a flat buffer with an offset table.
///
/// # Examples
///
/// ```
/// use classic_algos::sorting::{sorted_indices, ByteKeys};
///
/// struct Packed {
///     data: Vec<u8>,
///     offsets: Vec<usize>,
/// }
///
/// impl ByteKeys for Packed {
///     fn key(&self, index: usize) -> &[u8] {
///         &self.data[self.offsets[index]..self.offsets[index + 1]]
///     }
///
///     fn len(&self) -> usize {
///         self.offsets.len() - 1
///     }
/// }
///
/// let packed = Packed { data: b"pearfig".to_vec(), offsets: vec![0, 4, 7] };
/// assert_eq!(sorted_indices(&packed), vec![1, 0]);
/// ```
pub trait ByteKeys {
    /// Key bytes of the item at `index`.
    fn key(&self, index: usize) -> &[u8];

    /// Number of items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The 8 key bytes starting at `offset`, big-endian, zero padded past the end.
    #[inline]
    fn prefix_at(&self, index: usize, offset: usize) -> u64 {
        let key = self.key(index);
        if offset >= key.len() {
            return 0;
        }

        let tail = &key[offset..];
        let mut buf = [0u8; PREFIX_BYTES];
        let take = tail.len().min(PREFIX_BYTES);
        buf[..take].copy_from_slice(&tail[..take]);
        u64::from_be_bytes(buf)
    }
}

impl<T: AsRef<[u8]>> ByteKeys for [T] {
    fn key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> ByteKeys for Vec<T> {
    fn key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<[u8]>> ByteKeys for VecDeque<T> {
    fn key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_padding() {
        let keys = vec![b"ab".to_vec(), b"abcdefghij".to_vec()];
        assert_eq!(keys.prefix_at(0, 0), 0x6162_0000_0000_0000);
        assert_eq!(keys.prefix_at(1, 0), u64::from_be_bytes(*b"abcdefgh"));
        assert_eq!(keys.prefix_at(1, 8), 0x696a_0000_0000_0000);
        assert_eq!(keys.prefix_at(0, 5), 0);
    }

    #[test]
    fn test_lead_byte() {
        let cursor = KeyCursor {
            index: 0,
            prefix: 0x7a00_0000_0000_0001,
        };
        assert_eq!(cursor.lead_byte(), b'z');
    }
}
