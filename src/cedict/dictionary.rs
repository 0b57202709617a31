use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, trace};

use super::codec::compression;
use super::format::entry::{self as entry_format, ParsedLine};
use super::romanization::{self, Initials, Pinyin, Romanization};
use super::segment::Segments;
use super::types::error::{CedictError, Result};
use super::types::models::{CompressionType, Entry};

/// A compiled CC-CEDICT dictionary.
///
/// Built once by [`Dictionary::load`] (or a [`DictionaryBuilder`]) and
/// read-only afterwards, so a single instance can be shared by reference
/// across threads without locking.
///
/// Every entry is indexed under both its traditional and its simplified
/// headword. When several entries share a headword, the one that appeared
/// first in the file is the canonical pronunciation for that surface form.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: HashMap<String, Vec<usize>>,
    word_max_length: usize,
}

impl Dictionary {
    /// Loads a GZIP-compressed CC-CEDICT file, e.g. `cedict_1_0_ts_utf-8_mdbg.txt.gz`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be opened
    /// - The GZIP stream is corrupt
    /// - The text is not valid UTF-8
    /// - Any non-comment line is not a well-formed entry
    ///
    /// Loading is all-or-nothing: no dictionary is returned on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, CompressionType::Gzip)
    }

    /// Loads a dictionary file stored in the given container format.
    pub fn open(path: impl AsRef<Path>, compression_type: CompressionType) -> Result<Self> {
        let path = path.as_ref();
        info!(
            "Opening dictionary file: {} (compression: {})",
            path.display(),
            compression_type
        );
        let file = File::open(path)?;
        read_entries(compression::decoder(file, compression_type), compression_type)
    }

    /// Loads dictionary text that is already decompressed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        read_entries(reader, CompressionType::None)
    }

    /// Returns the number of entries accepted by the loader.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of distinct headwords.
    pub fn num_keys(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length, in code points, of the longest headword.
    ///
    /// Bounds the prefix window during segmentation.
    pub fn word_max_length(&self) -> usize {
        self.word_max_length
    }

    /// All entries in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Returns every entry indexed under `word`, in file order.
    pub fn entries(&self, word: &str) -> impl Iterator<Item = &Entry> + '_ {
        self.index
            .get(word)
            .into_iter()
            .flatten()
            .map(move |&id| &self.entries[id])
    }

    /// Returns the canonical (first loaded) entry for `word`.
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        self.entries(word).next()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Splits `text` into dictionary words and unmatched characters using
    /// greedy longest-prefix matching.
    pub fn segments<'d, 't>(&'d self, text: &'t str) -> Segments<'d, 't> {
        Segments::new(self, text)
    }

    /// Romanizes `text` with the given formatting policy.
    ///
    /// Never fails: text with no dictionary match at all is still formatted
    /// one character at a time. The result is never truncated.
    pub fn convert<F: Romanization + ?Sized>(&self, text: &str, format: &F) -> String {
        romanization::convert(self, text, format)
    }

    /// Returns the pinyin of `text` with tone digits, syllables separated by spaces.
    ///
    /// ```no_run
    /// # use cedict_pinyin::Dictionary;
    /// let dict = Dictionary::load("cedict_1_0_ts_utf-8_mdbg.txt.gz").unwrap();
    /// assert_eq!(dict.pinyin("中国"), "Zhong1 guo2");
    /// ```
    pub fn pinyin(&self, text: &str) -> String {
        self.convert(text, &Pinyin)
    }

    /// Returns the lowercase pinyin initials of `text`, e.g. `zg` for `中国`.
    pub fn pinyin_initials(&self, text: &str) -> String {
        self.convert(text, &Initials)
    }
}

impl FromStr for Dictionary {
    type Err = CedictError;

    /// Parses uncompressed dictionary text.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable accumulator used while a dictionary is being loaded.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: Vec<Entry>,
    index: HashMap<String, Vec<usize>>,
    word_max_length: usize,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `entry` under both of its headwords, after any entries
    /// already indexed there.
    pub fn add_entry(&mut self, entry: Entry) -> &mut Self {
        let id = self.entries.len();

        self.register(&entry.traditional, id);
        if entry.simplified != entry.traditional {
            self.register(&entry.simplified, id);
        }

        self.entries.push(entry);
        self
    }

    fn register(&mut self, headword: &str, id: usize) {
        self.word_max_length = self.word_max_length.max(headword.chars().count());
        self.index.entry(headword.to_owned()).or_default().push(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> Dictionary {
        Dictionary {
            entries: self.entries,
            index: self.index,
            word_max_length: self.word_max_length,
        }
    }
}

impl FromIterator<Entry> for DictionaryBuilder {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut builder = Self::new();
        for entry in iter {
            builder.add_entry(entry);
        }
        builder
    }
}

impl FromIterator<Entry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        iter.into_iter().collect::<DictionaryBuilder>().build()
    }
}

/// Reads every line of `reader` into a new dictionary.
///
/// `compression_type` only decides how read failures are reported.
fn read_entries<R: BufRead>(mut reader: R, compression_type: CompressionType) -> Result<Dictionary> {
    let mut builder = DictionaryBuilder::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| compression::read_error(e, compression_type))?;
        if read == 0 {
            break;
        }
        line_number += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        let line = std::str::from_utf8(&buf).map_err(|e| {
            CedictError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {} is not valid UTF-8: {}", line_number, e),
            ))
        })?;

        match entry_format::parse_line(line) {
            ParsedLine::Skip => trace!("Skipping line {}", line_number),
            ParsedLine::Entry(entry) => {
                builder.add_entry(entry);
            }
            ParsedLine::Invalid => return Err(CedictError::parse(line_number, line)),
        }
    }

    let dictionary = builder.build();
    info!("{} entries are loaded", dictionary.entry_count());
    debug!(
        "Dictionary has {} headwords, longest is {} characters",
        dictionary.num_keys(),
        dictionary.word_max_length()
    );
    Ok(dictionary)
}
