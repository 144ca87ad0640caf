//! MySQL single-byte collations.
//!
//! Provides `binary` and the `latin1` and `ascii` collations, with the IDs and sort
//! orders of the MySQL server.
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::use_self)]

use collations_core::{Charset, CollationId, Registry, RegistryBuilder, RegistryOptions, Result};
use once_cell::sync::Lazy;

mod binary;
mod simple;
pub mod tables;

pub use binary::Binary;
pub use simple::{SimpleBin, SimpleCi, SortOrder};

/// `binary` (63), the default collation of the `binary` charset.
pub static BINARY: Binary = Binary;

/// `latin1_swedish_ci` (8), the default collation of `latin1`.
pub static LATIN1_SWEDISH_CI: SimpleCi = SimpleCi::new(
    CollationId::LATIN1_SWEDISH_CI,
    "latin1_swedish_ci",
    Charset::Latin1,
    &tables::SORT_ORDER_LATIN1_SWEDISH_CI,
);

/// `latin1_bin` (47).
pub static LATIN1_BIN: SimpleBin =
    SimpleBin::new(CollationId::LATIN1_BIN, "latin1_bin", Charset::Latin1);

/// `ascii_general_ci` (11), the default collation of `ascii`.
pub static ASCII_GENERAL_CI: SimpleCi = SimpleCi::new(
    CollationId::ASCII_GENERAL_CI,
    "ascii_general_ci",
    Charset::Ascii,
    &tables::SORT_ORDER_ASCII_GENERAL_CI,
);

/// `ascii_bin` (65).
pub static ASCII_BIN: SimpleBin =
    SimpleBin::new(CollationId::ASCII_BIN, "ascii_bin", Charset::Ascii);

/// Registers every collation of this crate with `builder`.
pub fn register_builtins(builder: &mut RegistryBuilder) -> Result<()> {
    builder
        .register(&BINARY, true)?
        .register(&LATIN1_SWEDISH_CI, true)?
        .register(&LATIN1_BIN, false)?
        .register(&ASCII_GENERAL_CI, true)?
        .register(&ASCII_BIN, false)?;

    Ok(())
}

/// Builds a registry holding every collation of this crate.
///
/// Call once at startup and share the result, or use [`registry`] for a
/// process-wide instance configured from the environment.
pub fn build_registry(options: RegistryOptions) -> Result<Registry> {
    let mut builder = RegistryBuilder::with_options(options);
    register_builtins(&mut builder)?;
    builder.build()
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    build_registry(RegistryOptions::from_env()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to build the collation registry");
        panic!("invalid collation configuration: {e}")
    })
});

/// The process-wide registry of built-in collations.
///
/// Built on first use with [`RegistryOptions::from_env`]. A configuration error
/// (such as an unknown `COLLATION_SERVER`) is fatal and panics on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
