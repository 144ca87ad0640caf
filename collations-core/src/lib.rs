//! Core of the collations toolkit.
//!
//! Not intended to be used directly; see the `collations` crate for the public facade.
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::use_self)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod logger;

pub mod charset;
pub mod collation;
pub mod error;
pub mod options;
pub mod registry;
pub mod weight_string;

#[doc(inline)]
pub use self::{
    charset::Charset,
    collation::{Collation, CollationId},
    error::{Error, Result},
    options::{LogSettings, RegistryOptions},
    registry::{Registry, RegistryBuilder},
    weight_string::{pad_simple, Padding, WeightLimit, PAD_TO_MAX},
};
