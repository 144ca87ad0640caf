use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hasher;

use crate::charset::Charset;
use crate::weight_string::WeightLimit;

// MySQL identifies a collation by a small integer that shows up on the wire
// (`Protocol::HandshakeResponse41`, `Protocol::ColumnDefinition`), in `SHOW COLLATION`
// and in persisted index metadata. The numbering has gaps and is not grouped by
// charset, so it has to be carried verbatim; an ID is never reassigned.

/// A MySQL collation identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CollationId(pub u16);

impl CollationId {
    /// Default collation of `latin1`, and the server default before MySQL 8.0.
    pub const LATIN1_SWEDISH_CI: Self = CollationId(8);

    /// Default collation of `ascii`.
    pub const ASCII_GENERAL_CI: Self = CollationId(11);

    pub const LATIN1_BIN: Self = CollationId(47);

    /// Collation used for all non-string data.
    pub const BINARY: Self = CollationId(63);

    pub const ASCII_BIN: Self = CollationId(65);
}

impl Display for CollationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A strategy for ordering and encoding strings exactly as a MySQL collation does.
///
/// Implementations are immutable, process-lifetime values. Every method is a pure
/// function of its arguments, so a collation can be shared across threads freely.
pub trait Collation: Debug + Send + Sync + 'static {
    /// The name of this collation, as in `SHOW COLLATION`.
    fn name(&self) -> &str;

    /// The MySQL identifier of this collation.
    fn id(&self) -> CollationId;

    /// The charset this collation operates over.
    fn charset(&self) -> Charset;

    /// Returns `true` if this collation orders values by their raw bytes.
    ///
    /// Callers may skip weight strings entirely and compare raw bytes when this is set.
    fn is_binary(&self) -> bool;

    /// Compares `left` and `right`.
    ///
    /// If `right_is_prefix` is set, `right` is a prefix of some longer value and
    /// `left` is considered equal to it when their overlapping weights are equal and
    /// `left` is at least as long. This is the comparison an index range scan on
    /// `LIKE 'abc%'` or a prefix index needs.
    fn collate(&self, left: &[u8], right: &[u8], right_is_prefix: bool) -> Ordering;

    /// Appends the weight string of `src` to `dst`.
    ///
    /// Comparing two weight strings byte-wise gives the same result as
    /// [`collate`](Self::collate) on the original values. See [`WeightLimit`] for how
    /// `limit` truncates and pads the result.
    fn weight_string(&self, dst: &mut Vec<u8>, src: &[u8], limit: WeightLimit);

    /// The exact number of bytes [`weight_string`](Self::weight_string) appends for
    /// `num_bytes` bytes of input under [`WeightLimit::NoLimit`].
    fn weight_string_len(&self, num_bytes: usize) -> usize;

    /// Feeds the weights of `src` into `state`.
    ///
    /// Values that [`collate`](Self::collate) as equal hash identically.
    fn sort_hash(&self, src: &[u8], state: &mut dyn Hasher);

    /// Returns the weight string of `src` in a new buffer sized for `src`.
    fn weight_string_vec(&self, src: &[u8], limit: WeightLimit) -> Vec<u8> {
        let mut dst = Vec::<u8>::with_capacity(self.weight_string_len(src.len()));
        self.weight_string(&mut dst, src, limit);
        dst
    }
}
