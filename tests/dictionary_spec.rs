mod common;

use std::io::ErrorKind;
use std::path::Path;

use cedict_pinyin::{CedictError, CompressionType, Dictionary};
use common::{write_bytes, write_gz, CEDICT_SAMPLE, SENTENCE};

#[test]
fn loads_gzip_dictionary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_gz(dir.path(), "cedict_ts.u8.gz", CEDICT_SAMPLE);

    let dict = Dictionary::load(&path).expect("load dictionary");
    assert_eq!(dict.entry_count(), 12);
    assert_eq!(
        dict.word_max_length(),
        9,
        "longest headword is the nine-character proverb"
    );
    assert_eq!(dict.pinyin("中国"), "Zhong1 guo2");
    assert_eq!(dict.pinyin_initials("中国"), "zg");
}

#[test]
fn both_headwords_share_an_entry() {
    let dict = common::sample_dictionary();
    let traditional = dict.lookup("中國").expect("traditional headword");
    let simplified = dict.lookup("中国").expect("simplified headword");
    assert!(std::ptr::eq(traditional, simplified));
    assert_eq!(traditional.traditional, "中國");
    assert_eq!(traditional.simplified, "中国");
    assert_eq!(dict.pinyin("中國"), dict.pinyin("中国"));
}

#[test]
fn first_homograph_wins() {
    let dict = common::sample_dictionary();
    let pronunciations: Vec<String> = dict.entries("重").map(|e| e.pronunciation()).collect();
    assert_eq!(pronunciations, ["zhong4", "chong2"]);
    assert_eq!(dict.lookup("重").map(|e| e.pronunciation()).as_deref(), Some("zhong4"));
    assert_eq!(dict.pinyin("重"), "zhong4");
}

#[test]
fn syllables_keep_raw_value_and_tone() {
    let dict = common::sample_dictionary();
    let entry = dict.lookup("珍·奥斯汀").expect("Jane Austen");
    let raw: Vec<&str> = entry.syllables.iter().map(|s| s.raw_value()).collect();
    assert_eq!(raw, ["Zhen1", "·", "Ao4", "si1", "ting1"]);

    for syllable in &entry.syllables {
        assert!(
            syllable.raw_value().starts_with(syllable.value()),
            "value {:?} is not a prefix of {:?}",
            syllable.value(),
            syllable.raw_value()
        );
        if let Some(tone) = syllable.tone() {
            assert!(tone.is_ascii_digit());
            assert_eq!(syllable.raw_value().chars().last(), Some(tone));
        }
    }
    assert_eq!(entry.syllables[0].tone_number(), Some(1));
    assert_eq!(entry.syllables[1].tone_number(), None);
}

#[test]
fn loading_twice_gives_identical_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_gz(dir.path(), "cedict.txt.gz", CEDICT_SAMPLE);

    let first = Dictionary::load(&path).expect("first load");
    let second = Dictionary::load(&path).expect("second load");
    for text in [SENTENCE, "中国人", "", "重重", "xyz"] {
        assert_eq!(first.pinyin(text), second.pinyin(text));
        assert_eq!(first.pinyin_initials(text), second.pinyin_initials(text));
    }
    assert_eq!(first.entry_count(), second.entry_count());
}

#[test]
fn malformed_line_aborts_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = "中國 中国 [Zhong1 guo2] /China/\n人 人 /person/\n天 天 [tian1] /day/\n";
    let path = write_gz(dir.path(), "broken.txt.gz", text);

    match Dictionary::load(&path) {
        Err(CedictError::Parse { line_number, line }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "人 人 /person/");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn parse_error_message_names_the_line() {
    let err = "中國 中国 /China/\n"
        .parse::<Dictionary>()
        .expect_err("missing pronunciation");
    let message = err.to_string();
    assert!(
        message.contains("中國 中国 /China/"),
        "error message {:?} should include the offending line",
        message
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    match Dictionary::load(dir.path().join("absent.txt.gz")) {
        Err(CedictError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn corrupt_gzip_is_a_decompression_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bytes(dir.path(), "plain.txt.gz", CEDICT_SAMPLE.as_bytes());
    assert!(matches!(
        Dictionary::load(&path),
        Err(CedictError::Decompression(_))
    ));
}

#[test]
fn plain_text_dictionary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_bytes(dir.path(), "cedict_ts.u8", CEDICT_SAMPLE.as_bytes());

    assert_eq!(CompressionType::from_path(&path), CompressionType::None);
    let dict = Dictionary::open(&path, CompressionType::None).expect("open plain text");
    assert_eq!(dict.entry_count(), 12);
    assert_eq!(dict.pinyin("中国人"), "Zhong1 guo2 ren2");
}

#[test]
fn gzip_detected_from_extension() {
    assert_eq!(
        CompressionType::from_path(Path::new("cedict_ts.u8.gz")),
        CompressionType::Gzip
    );
    assert_eq!(
        CompressionType::from_path(Path::new("CEDICT.TXT.GZ")),
        CompressionType::Gzip
    );
    assert_eq!(
        CompressionType::from_path(Path::new("cedict.txt")),
        CompressionType::None
    );
}

#[test]
fn tabs_and_ideographic_spaces_separate_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = "# header\n\t\n中國\t中国\t[Zhong1 guo2]\t/China/\n \u{3000} \n人\u{3000}人 [ren2] /person/\n";
    let path = write_gz(dir.path(), "whitespace.txt.gz", text);

    let dict = Dictionary::load(&path).expect("whitespace-only lines are skipped");
    assert_eq!(dict.entry_count(), 2);
    assert_eq!(dict.pinyin("中国人"), "Zhong1 guo2 ren2");
    assert_eq!(dict.pinyin_initials("中國人"), "zgr");
}

#[test]
fn crlf_line_endings() {
    let text = CEDICT_SAMPLE.replace('\n', "\r\n");
    let dict: Dictionary = text.parse().expect("CRLF dictionary");
    assert_eq!(dict.entry_count(), 12);
    assert_eq!(dict.pinyin("人"), "ren2");
}

#[test]
fn comments_only_gives_empty_dictionary() {
    let dict: Dictionary = "# nothing here\n\n#! version=1\n".parse().expect("comments only");
    assert!(dict.is_empty());
    assert_eq!(dict.word_max_length(), 0);
    assert_eq!(dict.pinyin("中国"), "中 国");
}
