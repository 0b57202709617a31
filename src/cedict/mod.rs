//! Core CC-CEDICT dictionary module.
//!
//! # Module Organization
//!
//! - [`types`]: Entries, syllables and the crate error type
//! - [`codec`]: Container decoding (GZIP)
//! - [`format`]: Line-level parsing of dictionary text
//! - [`dictionary`]: The compiled headword index and its builder
//! - [`segment`]: Greedy longest-match segmentation
//! - [`romanization`]: Formatting policies (full pinyin, initials, custom)
//!
//! # Data flow
//!
//! ```text
//! .txt.gz ─ codec ─▶ lines ─ format ─▶ Entry ─▶ DictionaryBuilder ─▶ Dictionary
//!                                                                      │
//!                          text ─▶ Segments ─▶ Romanization ─▶ String ◀┘
//! ```

pub mod codec;
pub mod dictionary;
pub mod format;
pub mod romanization;
pub mod segment;
pub mod types;

pub use dictionary::{Dictionary, DictionaryBuilder};
pub use romanization::{FnRomanization, Initials, Pinyin, Romanization};
pub use segment::{Segment, Segments};
pub use types::error::{CedictError, Result};
pub use types::models::{CompressionType, Entry, Syllable};
