use std::cmp::Ordering;
use std::hash::Hasher;

use collations_core::{pad_simple, Charset, Collation, CollationId, Padding, WeightLimit};

/// The `binary` collation: raw byte order over arbitrary bytes.
///
/// Used for `BINARY`, `VARBINARY` and `BLOB` values. Weight strings are the bytes
/// themselves, and pad-to-capacity fills with `0x00` since binary data has no space
/// character.
#[derive(Debug)]
pub struct Binary;

impl Collation for Binary {
    fn name(&self) -> &str {
        "binary"
    }

    fn id(&self) -> CollationId {
        CollationId::BINARY
    }

    fn charset(&self) -> Charset {
        Charset::Binary
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn collate(&self, left: &[u8], right: &[u8], right_is_prefix: bool) -> Ordering {
        collate_bytes(left, right, right_is_prefix)
    }

    fn weight_string(&self, dst: &mut Vec<u8>, src: &[u8], limit: WeightLimit) {
        let (copy, padding) = limit.plan(src.len(), dst.capacity());

        dst.extend_from_slice(&src[..copy]);

        // a codepoint count truncates binary values but never pads them
        if let Padding::UpTo(_) = padding {
            pad_simple(0, dst, padding);
        }
    }

    fn weight_string_len(&self, num_bytes: usize) -> usize {
        num_bytes
    }

    fn sort_hash(&self, src: &[u8], state: &mut dyn Hasher) {
        state.write_usize(src.len());
        state.write(src);
    }
}

/// Compares raw bytes, honoring `right_is_prefix`.
pub(crate) fn collate_bytes(left: &[u8], right: &[u8], right_is_prefix: bool) -> Ordering {
    let len = left.len().min(right.len());

    match left[..len].cmp(&right[..len]) {
        Ordering::Equal => {}
        ord => return ord,
    }

    let left_len = if right_is_prefix { len } else { left.len() };

    left_len.cmp(&right.len())
}
