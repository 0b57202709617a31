//! Formatting policies applied to segmented text.

use std::borrow::Cow;

use super::dictionary::Dictionary;
use super::segment::Segment;
use super::types::models::Syllable;

/// Decides how segmented text is written out.
///
/// A conversion walks the [`Segment`]s of the input once. Every syllable of a
/// matched word goes through [`format_syllable`](Self::format_syllable) and
/// every unmatched character through [`format_char`](Self::format_char).
/// Non-empty pieces are joined with [`separator`](Self::separator); empty
/// pieces are dropped without leaving a separator behind.
pub trait Romanization {
    /// Placed between two consecutive non-empty pieces.
    fn separator(&self) -> &str;

    fn format_syllable<'a>(&self, syllable: &'a Syllable) -> Cow<'a, str>;

    fn format_char(&self, c: char) -> Cow<'static, str>;
}

/// Full pinyin with tone digits: `中国` becomes `Zhong1 guo2`.
///
/// Unmatched characters are copied through, except whitespace which is
/// dropped (the separator already spaces the output).
#[derive(Debug, Clone, Copy, Default)]
pub struct Pinyin;

impl Romanization for Pinyin {
    fn separator(&self) -> &str {
        " "
    }

    fn format_syllable<'a>(&self, syllable: &'a Syllable) -> Cow<'a, str> {
        Cow::Borrowed(syllable.raw_value())
    }

    fn format_char(&self, c: char) -> Cow<'static, str> {
        if c.is_whitespace() {
            Cow::Borrowed("")
        } else {
            Cow::Owned(c.to_string())
        }
    }
}

/// Lowercase initials with no separator: `中国` becomes `zg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initials;

impl Initials {
    /// ASCII uppercase is lowered; lowercase letters and numerals are kept;
    /// anything else has no initial.
    ///
    /// Numerals are any Unicode numeric character, so `〇` and `²` count.
    pub fn initial(c: char) -> Option<char> {
        if c.is_ascii_uppercase() {
            Some(c.to_ascii_lowercase())
        } else if c.is_lowercase() || c.is_numeric() {
            Some(c)
        } else {
            None
        }
    }

    fn piece(c: Option<char>) -> Cow<'static, str> {
        c.and_then(Self::initial)
            .map_or(Cow::Borrowed(""), |c| Cow::Owned(c.to_string()))
    }
}

impl Romanization for Initials {
    fn separator(&self) -> &str {
        ""
    }

    fn format_syllable<'a>(&self, syllable: &'a Syllable) -> Cow<'a, str> {
        Self::piece(syllable.value().chars().next())
    }

    fn format_char(&self, c: char) -> Cow<'static, str> {
        Self::piece(Some(c))
    }
}

/// A policy assembled from two closures and a separator.
///
/// ```
/// # use cedict_pinyin::{Dictionary, FnRomanization, Syllable};
/// let dict: Dictionary = "中國 中国 [Zhong1 guo2] /China/\n".parse().unwrap();
/// let dashed = FnRomanization::new(
///     |s: &Syllable| s.value().to_lowercase(),
///     |c: char| c.to_string(),
///     "-",
/// );
/// assert_eq!(dict.convert("中国", &dashed), "zhong-guo");
/// ```
pub struct FnRomanization<S, C> {
    format_syllable: S,
    format_char: C,
    separator: String,
}

impl<S, C> FnRomanization<S, C>
where
    S: Fn(&Syllable) -> String,
    C: Fn(char) -> String,
{
    pub fn new(format_syllable: S, format_char: C, separator: impl Into<String>) -> Self {
        Self {
            format_syllable,
            format_char,
            separator: separator.into(),
        }
    }
}

impl<S, C> Romanization for FnRomanization<S, C>
where
    S: Fn(&Syllable) -> String,
    C: Fn(char) -> String,
{
    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_syllable<'a>(&self, syllable: &'a Syllable) -> Cow<'a, str> {
        Cow::Owned((self.format_syllable)(syllable))
    }

    fn format_char(&self, c: char) -> Cow<'static, str> {
        Cow::Owned((self.format_char)(c))
    }
}

/// Segments `text` against `dictionary` and formats it with `format`.
pub fn convert<F: Romanization + ?Sized>(dictionary: &Dictionary, text: &str, format: &F) -> String {
    let separator = format.separator();
    let mut out = String::with_capacity(text.len() * 2);
    let mut push = |piece: &str| {
        if piece.is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(piece);
    };

    for segment in dictionary.segments(text) {
        match segment {
            Segment::Word { entry, .. } => {
                for syllable in &entry.syllables {
                    push(&format.format_syllable(syllable));
                }
            }
            Segment::Char(c) => push(&format.format_char(c)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_rule() {
        assert_eq!(Initials::initial('Z'), Some('z'));
        assert_eq!(Initials::initial('g'), Some('g'));
        assert_eq!(Initials::initial('3'), Some('3'));
        assert_eq!(Initials::initial('〇'), Some('〇'));
        assert_eq!(Initials::initial('²'), Some('²'));
        assert_eq!(Initials::initial('ü'), Some('ü'));
        assert_eq!(Initials::initial('·'), None);
        assert_eq!(Initials::initial(','), None);
        assert_eq!(Initials::initial(' '), None);
        assert_eq!(Initials::initial('中'), None);
    }

    #[test]
    fn pinyin_drops_whitespace_only() {
        assert_eq!(Pinyin.format_char(' '), "");
        assert_eq!(Pinyin.format_char('\u{3000}'), "");
        assert_eq!(Pinyin.format_char('A'), "A");
        assert_eq!(Pinyin.format_char('，'), "，");
    }

    #[test]
    fn initials_of_toneless_syllable() {
        assert_eq!(Initials.format_syllable(&Syllable::new("xx5")), "x");
        assert_eq!(Initials.format_syllable(&Syllable::new("5")), "");
        assert_eq!(Initials.format_syllable(&Syllable::new("·")), "");
    }
}
