//! MySQL-compatible collations.
//!
//! A [`Collation`] orders byte strings exactly as a MySQL collation does, and encodes
//! them into weight strings whose byte order matches that ordering. Use it to sort,
//! group, hash and index string values in a proxy or query engine the same way the
//! server would.
//!
//! ```rust
//! # fn main() -> collations::Result<()> {
//! use std::cmp::Ordering;
//! use collations::{CollationId, RegistryOptions, WeightLimit};
//!
//! let registry = collations::mysql::build_registry(RegistryOptions::new())?;
//! let swedish = registry.get(CollationId::LATIN1_SWEDISH_CI).unwrap();
//!
//! assert_eq!(swedish.collate(b"Hello", b"hELLO", false), Ordering::Equal);
//!
//! // fixed-width sort key for a `CHAR(8)` column
//! let key = swedish.weight_string_vec(b"Hello", WeightLimit::Codepoints(8));
//! assert_eq!(key, b"HELLO   ");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use collations_core::{charset, collation, error, options, registry, weight_string};

#[doc(inline)]
pub use collations_core::{
    Charset, Collation, CollationId, Error, LogSettings, Padding, Registry, RegistryBuilder,
    RegistryOptions, Result, WeightLimit, PAD_TO_MAX,
};

#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub use collations_mysql as mysql;

/// The process-wide registry of built-in MySQL collations.
///
/// See [`mysql::registry`].
#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub fn registry() -> &'static Registry {
    collations_mysql::registry()
}
