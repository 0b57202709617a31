use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use cedict_pinyin::{CompressionType, Dictionary, Initials, Pinyin, Romanization};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "cedict-pinyin",
    about = "Converts Chinese text to pinyin using a CC-CEDICT dictionary"
)]
struct Args {
    /// Path to the dictionary (e.g. cedict_1_0_ts_utf-8_mdbg.txt.gz).
    #[clap(short = 'd', long)]
    dict: PathBuf,

    /// Print lowercase initials (e.g. "zg") instead of full pinyin.
    #[clap(short = 'i', long)]
    initials: bool,

    /// Read the dictionary as uncompressed text even if it ends in `.gz`.
    #[clap(long)]
    plain: bool,

    /// Text to convert. Lines are read from stdin when omitted.
    text: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let compression_type = if args.plain {
        CompressionType::None
    } else {
        CompressionType::from_path(&args.dict)
    };

    eprintln!(
        "Loading the dictionary: {} ({})",
        args.dict.display(),
        compression_type
    );
    let dict = Dictionary::open(&args.dict, compression_type)?;
    eprintln!(
        "{} entries loaded (longest headword: {} characters)",
        dict.entry_count(),
        dict.word_max_length()
    );

    let format: &dyn Romanization = if args.initials { &Initials } else { &Pinyin };

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());

    if !args.text.is_empty() {
        writeln!(out, "{}", dict.convert(&args.text.join(" "), format))?;
    } else {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", dict.convert(&line?, format))?;
        }
    }
    out.flush()?;

    Ok(())
}
