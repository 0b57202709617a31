//! # cedict-pinyin
//!
//! Converts Chinese text to pinyin, or to pinyin initials, using a
//! CC-CEDICT dictionary (`cedict_1_0_ts_utf-8_mdbg.txt.gz`).
//!
//! Text is segmented greedily: at each position the longest headword known to
//! the dictionary wins, and characters that start no headword are passed
//! through (or dropped, depending on the formatting policy).
//!
//! ```no_run
//! use cedict_pinyin::Dictionary;
//!
//! let dict = Dictionary::load("cedict_1_0_ts_utf-8_mdbg.txt.gz")?;
//! assert_eq!(dict.pinyin("中国"), "Zhong1 guo2");
//! assert_eq!(dict.pinyin_initials("中国"), "zg");
//! # Ok::<(), cedict_pinyin::CedictError>(())
//! ```
//!
//! The [`ffi`] module exposes the same operations through a C ABI.
pub mod cedict;
pub mod ffi;

// Re-export the main types for convenience
pub use cedict::{
    CedictError,
    CompressionType,
    Dictionary,
    DictionaryBuilder,
    Entry,
    FnRomanization,
    Initials,
    Pinyin,
    Result,
    Romanization,
    Segment,
    Segments,
    Syllable,
};

/// Shorthand for [`CedictError`].
pub type Error = CedictError;
