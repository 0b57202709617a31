//! Decompression of dictionary containers.
//!
//! Dictionary files are line-oriented text, optionally wrapped in a GZIP
//! stream. Either way the loader sees a buffered byte reader.

use std::io::{self, BufRead, BufReader, Read};

use flate2::read::GzDecoder;
use log::trace;

use crate::cedict::types::error::CedictError;
use crate::cedict::types::models::CompressionType;

/// Wraps a raw byte source in the decoder for `compression_type`.
///
/// The GZIP header is only inspected on the first read, so a corrupt
/// container surfaces as an error from the returned reader, which
/// [`read_error`] classifies.
pub fn decoder<'a, R: Read + 'a>(
    source: R,
    compression_type: CompressionType,
) -> Box<dyn BufRead + 'a> {
    match compression_type {
        CompressionType::None => {
            trace!("No compression, reading text directly");
            Box::new(BufReader::new(source))
        }
        CompressionType::Gzip => {
            trace!("Decompressing with GZIP");
            Box::new(BufReader::new(GzDecoder::new(source)))
        }
    }
}

/// Maps an error raised while reading through [`decoder`] to the crate error.
///
/// Reads from a plain source fail only for I/O reasons. Reads through a GZIP
/// decoder mostly fail because the stream is corrupt or truncated.
pub fn read_error(err: io::Error, compression_type: CompressionType) -> CedictError {
    match compression_type {
        CompressionType::None => CedictError::Io(err),
        CompressionType::Gzip => {
            CedictError::Decompression(format!("GZIP decompression failed: {}", err))
        }
    }
}
