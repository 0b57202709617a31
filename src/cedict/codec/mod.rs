//! Codec layer for dictionary containers.
//!
//! # Submodules
//!
//! - [`compression`][]: Container decoding (plain text, GZIP)

pub mod compression;
