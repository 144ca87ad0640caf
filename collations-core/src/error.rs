use std::result::Result as StdResult;

use crate::charset::Charset;
use crate::collation::CollationId;

/// A specialized `Result` type for the collations toolkit.
pub type Result<T> = StdResult<T, Error>;

/// Represents all the ways building a collation registry can fail.
///
/// Comparing and encoding values never fails; every variant here describes a
/// programming or configuration mistake that should be reported at startup.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A collation was registered with the reserved identifier `0`.
    #[error("collation `{name}` uses the reserved collation ID 0")]
    InvalidId { name: String },

    /// Two collations were registered under the same identifier.
    #[error("collation ID {id} is already registered to `{existing}`; cannot register `{name}`")]
    DuplicateId {
        id: CollationId,
        existing: String,
        name: String,
    },

    /// Two collations were registered under the same (case-insensitive) name.
    #[error("a collation named `{0}` is already registered")]
    DuplicateName(String),

    /// A second collation was marked as the default for a charset.
    #[error("`{existing}` is already the default collation for {charset}; cannot make `{name}` the default")]
    DuplicateDefault {
        charset: Charset,
        existing: String,
        name: String,
    },

    /// A configured collation name is not registered.
    #[error("no collation found for name: {0}")]
    CollationNotFound(String),

    /// A configured collation does not belong to the configured charset.
    #[error("collation `{collation}` belongs to charset {actual}, not {expected}")]
    CharsetMismatch {
        collation: String,
        expected: Charset,
        actual: Charset,
    },
}
