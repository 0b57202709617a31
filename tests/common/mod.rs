#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use cedict_pinyin::Dictionary;
use flate2::write::GzEncoder;
use flate2::Compression;

/// A slice of CC-CEDICT covering the sample sentences below.
pub const CEDICT_SAMPLE: &str = "\
# CC-CEDICT
# Community maintained free Chinese-English dictionary.
#! version=1
#! subversion=0

體重 体重 [ti3 zhong4] /body weight/
重 重 [zhong4] /heavy/serious/
重 重 [chong2] /to repeat/again/
兩 两 [liang3] /two/both/
兩重天 两重天 [liang3 chong2 tian1] /two contrasting worlds/
天 天 [tian1] /day/sky/
B B [bi1] /letter B/
珍·奧斯汀 珍·奥斯汀 [Zhen1 · Ao4 si1 ting1] /Jane Austen/
人為財死，鳥為食亡 人为财死，鸟为食亡 [ren2 wei4 cai2 si3 , niao3 wei4 shi2 wang2] /men will die for wealth, birds for food/
中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
中國人 中国人 [Zhong1 guo2 ren2] /Chinese person/
人 人 [ren2] /person/people/
";

pub const SENTENCE: &str = "体重两重天ABC 珍·奥斯汀 人为财死，鸟为食亡";
pub const SENTENCE_PINYIN: &str =
    "ti3 zhong4 liang3 chong2 tian1 A bi1 C Zhen1 · Ao4 si1 ting1 ren2 wei4 cai2 si3 , niao3 wei4 shi2 wang2";
pub const SENTENCE_INITIALS: &str = "tzlctabczastrwcsnwsw";

pub fn sample_dictionary() -> Dictionary {
    CEDICT_SAMPLE.parse().expect("sample dictionary parses")
}

pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

/// Writes `text` GZIP-compressed to `dir/name`.
pub fn write_gz(dir: &Path, name: &str, text: &str) -> PathBuf {
    write_bytes(dir, name, &gzip(text))
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path)
        .unwrap_or_else(|e| panic!("failed to create {}: {}", path.display(), e));
    file.write_all(bytes).expect("write fixture");
    path
}
