use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hasher;

use collations_core::{pad_simple, Charset, Collation, CollationId, WeightLimit};

use crate::binary::collate_bytes;

/// Weight of every byte value in a single-byte charset, indexed by the byte.
pub type SortOrder = [u8; 256];

// `CHAR` values compare as if padded with spaces, so weight strings are too
const PAD_SPACE: u8 = b' ';

/// A case- and accent-sensitive collation over a single-byte charset (`*_bin`).
///
/// Compares like [`Binary`](crate::Binary) but pads weight strings with spaces.
#[derive(Debug)]
pub struct SimpleBin {
    id: CollationId,
    name: &'static str,
    charset: Charset,
}

impl SimpleBin {
    pub const fn new(id: CollationId, name: &'static str, charset: Charset) -> Self {
        Self { id, name, charset }
    }
}

impl Collation for SimpleBin {
    fn name(&self) -> &str {
        self.name
    }

    fn id(&self) -> CollationId {
        self.id
    }

    fn charset(&self) -> Charset {
        self.charset
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn collate(&self, left: &[u8], right: &[u8], right_is_prefix: bool) -> Ordering {
        collate_bytes(left, right, right_is_prefix)
    }

    fn weight_string(&self, dst: &mut Vec<u8>, src: &[u8], limit: WeightLimit) {
        weight_string_simple(dst, src, limit, |b| b);
    }

    fn weight_string_len(&self, num_bytes: usize) -> usize {
        num_bytes
    }

    fn sort_hash(&self, src: &[u8], state: &mut dyn Hasher) {
        state.write_usize(src.len());
        state.write(src);
    }
}

/// A case-insensitive collation over a single-byte charset, driven by a [`SortOrder`].
///
/// Bytes with the same weight compare equal, so `'A'` and `'a'` are equal under
/// `latin1_swedish_ci`. Weight strings are lossy.
pub struct SimpleCi {
    id: CollationId,
    name: &'static str,
    charset: Charset,
    sort_order: &'static SortOrder,
}

impl SimpleCi {
    pub const fn new(
        id: CollationId,
        name: &'static str,
        charset: Charset,
        sort_order: &'static SortOrder,
    ) -> Self {
        Self {
            id,
            name,
            charset,
            sort_order,
        }
    }

    #[inline]
    fn weight(&self, b: u8) -> u8 {
        self.sort_order[usize::from(b)]
    }
}

impl Debug for SimpleCi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCi")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("charset", &self.charset)
            .finish_non_exhaustive()
    }
}

impl Collation for SimpleCi {
    fn name(&self) -> &str {
        self.name
    }

    fn id(&self) -> CollationId {
        self.id
    }

    fn charset(&self) -> Charset {
        self.charset
    }

    fn is_binary(&self) -> bool {
        false
    }

    fn collate(&self, left: &[u8], right: &[u8], right_is_prefix: bool) -> Ordering {
        for (&l, &r) in left.iter().zip(right) {
            let (l, r) = (self.weight(l), self.weight(r));

            if l != r {
                return l.cmp(&r);
            }
        }

        // every overlapping weight is equal, so only the lengths are left to compare
        let left_len = if right_is_prefix {
            left.len().min(right.len())
        } else {
            left.len()
        };

        left_len.cmp(&right.len())
    }

    fn weight_string(&self, dst: &mut Vec<u8>, src: &[u8], limit: WeightLimit) {
        weight_string_simple(dst, src, limit, |b| self.weight(b));
    }

    fn weight_string_len(&self, num_bytes: usize) -> usize {
        num_bytes
    }

    fn sort_hash(&self, src: &[u8], state: &mut dyn Hasher) {
        state.write_usize(src.len());

        for &b in src {
            state.write_u8(self.weight(b));
        }
    }
}

fn weight_string_simple(
    dst: &mut Vec<u8>,
    src: &[u8],
    limit: WeightLimit,
    weight: impl Fn(u8) -> u8,
) {
    let (copy, padding) = limit.plan(src.len(), dst.capacity());

    dst.extend(src[..copy].iter().map(|&b| weight(b)));

    pad_simple(PAD_SPACE, dst, padding);
}
