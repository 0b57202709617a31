//! Text format parsing layer for CC-CEDICT dictionary files.
//!
//! This module sits between raw container decoding in
//! [`codec`](crate::cedict::codec) and the
//! [`Dictionary`](crate::cedict::dictionary::Dictionary) that indexes entries.
//!
//! - [`entry`]: Splits a line into headwords and pronunciation syllables

pub mod entry;
