//! Weight-string length control and padding.

/// Raw codepoint count that requests padding up to the destination's capacity.
///
/// Callers that carry MySQL's integer convention for the length argument of
/// `WEIGHT_STRING()` can convert with [`WeightLimit::from`]. No `CHAR` column can
/// be declared this wide, so the value never collides with a real count.
pub const PAD_TO_MAX: i32 = i32::MAX;

/// How much of the input [`Collation::weight_string`] encodes, and how the
/// result is padded.
///
/// [`Collation::weight_string`]: crate::Collation::weight_string
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum WeightLimit {
    /// Encode every input unit; never pad.
    #[default]
    NoLimit,

    /// Encode at most `n` input units, then pad with one pad unit for every unit
    /// short of `n`. This matches the comparison semantics of `CHAR(n)`.
    Codepoints(usize),

    /// Encode every input unit, then pad until the destination reaches the
    /// capacity it had when the call started.
    ///
    /// Pre-size the destination with [`Vec::with_capacity`] to get a fixed-width key.
    PadToCapacity,
}

impl WeightLimit {
    /// Splits a request over `src_len` input units into the number of units to
    /// encode and the padding to apply afterwards.
    ///
    /// `capacity` is the capacity of the destination before anything was written.
    pub const fn plan(self, src_len: usize, capacity: usize) -> (usize, Padding) {
        match self {
            Self::NoLimit => (src_len, Padding::Residual(0)),
            Self::PadToCapacity => (src_len, Padding::UpTo(capacity)),
            Self::Codepoints(n) => {
                let copy = if src_len < n { src_len } else { n };
                (copy, Padding::Residual(n - copy))
            }
        }
    }
}

impl From<i32> for WeightLimit {
    /// `0` means no limit, [`PAD_TO_MAX`] pads to capacity, and any other value is a
    /// codepoint count. Negative counts encode nothing.
    fn from(raw: i32) -> Self {
        match raw {
            0 => Self::NoLimit,
            PAD_TO_MAX => Self::PadToCapacity,
            n => Self::Codepoints(usize::try_from(n).unwrap_or(0)),
        }
    }
}

/// Padding applied after the encoded part of a weight string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Padding {
    /// Append exactly this many pad bytes.
    Residual(usize),

    /// Append pad bytes until the buffer is this long. Never shrinks the buffer.
    UpTo(usize),
}

/// Pads an encoded weight string with `pad`.
///
/// This is the padding routine shared by all single-byte collations. With
/// [`Padding::UpTo`] the target must not exceed the capacity the buffer had before
/// encoding started, so padding never reallocates.
pub fn pad_simple(pad: u8, dst: &mut Vec<u8>, padding: Padding) {
    let target = match padding {
        Padding::Residual(n) => dst.len().saturating_add(n),
        Padding::UpTo(max) => max,
    };

    if dst.len() < target {
        dst.resize(target, pad);
    }
}
