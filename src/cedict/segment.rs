//! Greedy longest-match segmentation of text against a [`Dictionary`].
//!
//! At each step the longest prefix of the remaining text (at most
//! [`Dictionary::word_max_length`] characters) that is a headword is consumed
//! as a [`Segment::Word`]. When no prefix matches, exactly one character is
//! consumed as a [`Segment::Char`]. Consumed text is never revisited.
//!
//! # Example
//! ```no_run
//! # use cedict_pinyin::{Dictionary, Segment};
//! # let dict = Dictionary::load("cedict_1_0_ts_utf-8_mdbg.txt.gz").unwrap();
//! for segment in dict.segments("中国人") {
//!     match segment {
//!         Segment::Word { text, entry } => println!("{} [{}]", text, entry.pronunciation()),
//!         Segment::Char(c) => println!("{}", c),
//!     }
//! }
//! ```

use std::iter::FusedIterator;

use super::dictionary::Dictionary;
use super::types::models::Entry;

/// One step of segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'d, 't> {
    /// A headword found in the dictionary, with its canonical entry.
    Word { text: &'t str, entry: &'d Entry },
    /// A character that starts no known headword.
    Char(char),
}

impl Segment<'_, '_> {
    /// Number of code points consumed by this segment.
    pub fn char_len(&self) -> usize {
        match self {
            Segment::Word { text, .. } => text.chars().count(),
            Segment::Char(_) => 1,
        }
    }
}

/// Iterator over the [`Segment`]s of a text.
///
/// Created by [`Dictionary::segments()`].
#[derive(Debug, Clone)]
pub struct Segments<'d, 't> {
    dictionary: &'d Dictionary,
    rest: &'t str,
}

impl<'d, 't> Segments<'d, 't> {
    pub(super) fn new(dictionary: &'d Dictionary, text: &'t str) -> Self {
        Self {
            dictionary,
            rest: text,
        }
    }

    /// The text not yet consumed.
    pub fn remainder(&self) -> &'t str {
        self.rest
    }

    /// Finds the longest headword prefixing the remaining text.
    fn longest_match(&self) -> Option<(&'t str, &'d Entry)> {
        let max = self.dictionary.word_max_length();
        let window_end = self
            .rest
            .char_indices()
            .nth(max)
            .map_or(self.rest.len(), |(i, _)| i);
        let mut window = &self.rest[..window_end];

        while let Some(last) = window.chars().next_back() {
            if let Some(entry) = self.dictionary.lookup(window) {
                return Some((window, entry));
            }
            window = &window[..window.len() - last.len_utf8()];
        }
        None
    }
}

impl<'d, 't> Iterator for Segments<'d, 't> {
    type Item = Segment<'d, 't>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((text, entry)) = self.longest_match() {
            self.rest = &self.rest[text.len()..];
            return Some(Segment::Word { text, entry });
        }

        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(Segment::Char(c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every segment consumes at least one byte.
        (usize::from(!self.rest.is_empty()), Some(self.rest.len()))
    }
}

impl FusedIterator for Segments<'_, '_> {}
