use std::fmt::{self, Display, Formatter};

/// The byte encoding a collation operates over.
///
/// Collations carry a charset as an identifier only; nothing in this crate
/// inspects or validates the encoding of the bytes handed to a collation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Charset {
    /// Arbitrary bytes. Used for `BINARY`, `VARBINARY` and `BLOB` columns.
    Binary,

    /// `latin1`, which MySQL treats as `cp1252`.
    Latin1,

    /// 7-bit US ASCII.
    Ascii,
}

impl Charset {
    /// The name MySQL uses for this charset (as in `SHOW CHARACTER SET`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
        }
    }

    /// Looks up a charset by its MySQL name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Binary, Self::Latin1, Self::Ascii]
            .into_iter()
            .find(|charset| charset.name().eq_ignore_ascii_case(name))
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
