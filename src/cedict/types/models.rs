//! Core data structures for CC-CEDICT dictionary components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Pronunciation syllables and dictionary entries
//! - The compression container of a dictionary file

use std::fmt;
use std::path::Path;

/// A single pronunciation unit, e.g. `Zhong1`.
///
/// `raw_value` is the token exactly as written in the dictionary. When its
/// final character is an ASCII digit, that digit is the tone and `value` is
/// everything before it; otherwise `value == raw_value` and there is no tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    raw_value: String,
    tone: Option<char>,
}

impl Syllable {
    /// Decomposes a pronunciation token into its base value and tone.
    pub fn new(raw_value: impl Into<String>) -> Self {
        let raw_value = raw_value.into();
        let tone = raw_value.chars().last().filter(char::is_ascii_digit);
        Self { raw_value, tone }
    }

    /// The syllable as read from the dictionary, tone digit included.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The syllable with its trailing tone digit stripped.
    pub fn value(&self) -> &str {
        match self.tone {
            // Tone digits are ASCII, so the last byte is the whole character.
            Some(_) => &self.raw_value[..self.raw_value.len() - 1],
            None => &self.raw_value,
        }
    }

    /// The trailing tone character, if any.
    pub fn tone(&self) -> Option<char> {
        self.tone
    }

    /// The tone as a number (CC-CEDICT uses 1-5, with 5 for the neutral tone).
    pub fn tone_number(&self) -> Option<u32> {
        self.tone.and_then(|t| t.to_digit(10))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw_value)
    }
}

/// One dictionary line: both headword forms and their pronunciation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub traditional: String,
    pub simplified: String,
    /// Never empty for an entry accepted by the loader.
    pub syllables: Vec<Syllable>,
}

impl Entry {
    /// The pronunciation joined by single spaces, as it appears between the
    /// brackets of a dictionary line.
    pub fn pronunciation(&self) -> String {
        self.syllables
            .iter()
            .map(Syllable::raw_value)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Container format of a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionType {
    /// Plain UTF-8 text.
    None,
    /// GZIP stream, the format CC-CEDICT is distributed in.
    #[default]
    Gzip,
}

impl CompressionType {
    /// Guesses the container from a file name: `.gz` means GZIP, anything
    /// else is read as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Self::Gzip,
            _ => Self::None,
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompressionType::None => write!(f, "none"),
            CompressionType::Gzip => write!(f, "gzip"),
        }
    }
}
