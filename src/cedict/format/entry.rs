//! # CC-CEDICT Line Parsing
//!
//! Every dictionary line has the shape
//!
//! ```text
//! Traditional Simplified [pin1 yin1] /English equivalent 1/equivalent 2/
//! 中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
//! ```
//!
//! Only the two headwords and the bracketed pronunciation are kept; the
//! glossary after it is ignored.

use crate::cedict::types::models::{Entry, Syllable};

/// Outcome of parsing one line of a dictionary file.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank line or `#` comment.
    Skip,
    Entry(Entry),
    /// The line is neither skippable nor a well-formed entry.
    Invalid,
}

/// A token produced by [`Tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A whitespace-delimited word.
    Plain(&'a str),
    /// The contents of a `[...]` group, brackets stripped.
    Bracketed(&'a str),
    /// A `[` with no matching `]`.
    Unterminated,
}

/// Splits a line into whitespace-delimited tokens, reading `[...]` as one token.
///
/// A `[` also ends a plain token, so `中国[zhong1]` yields two tokens.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start_matches(char::is_whitespace);
        if self.rest.is_empty() {
            return None;
        }

        if let Some(group) = self.rest.strip_prefix('[') {
            return Some(match group.find(']') {
                Some(end) => {
                    self.rest = &group[end + 1..];
                    Token::Bracketed(&group[..end])
                }
                None => {
                    self.rest = "";
                    Token::Unterminated
                }
            });
        }

        let end = self
            .rest
            .find(|c: char| c.is_whitespace() || c == '[')
            .unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Plain(word))
    }
}

/// Parses a single dictionary line.
///
/// A trailing `\r` is ignored so CRLF files load the same as LF files.
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut tokens = Tokens::new(line);

    let traditional = match tokens.next() {
        None => return ParsedLine::Skip,
        Some(Token::Plain(word)) if word.starts_with('#') => return ParsedLine::Skip,
        Some(Token::Plain(word)) => word,
        Some(_) => return ParsedLine::Invalid,
    };
    let simplified = match tokens.next() {
        Some(Token::Plain(word)) => word,
        _ => return ParsedLine::Invalid,
    };
    let pronunciation = match tokens.next() {
        Some(Token::Bracketed(group)) => group,
        _ => return ParsedLine::Invalid,
    };

    let syllables = parse_syllables(pronunciation);
    if syllables.is_empty() {
        return ParsedLine::Invalid;
    }

    ParsedLine::Entry(Entry {
        traditional: traditional.to_owned(),
        simplified: simplified.to_owned(),
        syllables,
    })
}

/// Splits the contents of a pronunciation group into syllables.
pub fn parse_syllables(group: &str) -> Vec<Syllable> {
    group.split_whitespace().map(Syllable::new).collect()
}
