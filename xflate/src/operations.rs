//! Raw DEFLATE compression and decompression over byte streams.

use std::io::{self, BufRead, Write};

use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::config::{DEFAULT_BUFFER_SIZE, MAX_LEVEL};
use crate::error::{Error, Phase, Result};

/// Maps a command-line compression level onto the DEFLATE engine.
///
/// `0..=9` are used as is, `-1` selects the engine default and `-2` the
/// fastest setting.
///
/// # Errors
///
/// Returns [`Error::InvalidCompressionLevel`] for levels outside `-2..=9`.
pub fn compression_for(level: i32) -> Result<Compression> {
    match level {
        -2 => Ok(Compression::fast()),
        -1 => Ok(Compression::default()),
        0..=MAX_LEVEL => Ok(Compression::new(level.unsigned_abs())),
        _ => Err(Error::InvalidCompressionLevel { level }),
    }
}

/// Compresses everything from `input` into a raw DEFLATE stream on `output`.
///
/// Returns the number of uncompressed bytes read. `output` is not flushed.
pub fn compress_stream(mut input: impl BufRead, output: impl Write, level: i32) -> Result<u64> {
    let compression = compression_for(level)?;

    let mut encoder = DeflateEncoder::new(output, compression);
    let bytes_read = io::copy(&mut input, &mut encoder).map_err(|source| Error::Transform {
        phase: Phase::Compressing,
        source,
    })?;

    encoder.try_finish().map_err(|source| Error::Transform {
        phase: Phase::Closing,
        source,
    })?;

    log::info!(
        "compressed {bytes_read} bytes into {} bytes (level {level})",
        encoder.total_out()
    );

    Ok(bytes_read)
}

/// Decompresses a raw DEFLATE stream from `input` into `output`.
///
/// Stops at the end of the first DEFLATE stream; trailing bytes are left
/// unread. Returns the number of decompressed bytes written.
///
/// # Errors
///
/// Fails with [`Phase::Decompressing`] on corrupt data, on input that ends
/// before the final block, and on write errors.
pub fn decompress_stream(mut input: impl BufRead, mut output: impl Write) -> Result<u64> {
    let mut inflater = Decompress::new(false);
    let mut buf = vec![0u8; DEFAULT_BUFFER_SIZE];

    let transform = |source: io::Error| Error::Transform {
        phase: Phase::Decompressing,
        source,
    };

    loop {
        let chunk = input.fill_buf().map_err(transform)?;
        let eof = chunk.is_empty();
        let flush = if eof {
            FlushDecompress::Finish
        } else {
            FlushDecompress::None
        };

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let status = inflater
            .decompress(chunk, &mut buf, flush)
            .map_err(|err| transform(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        let consumed = usize::try_from(inflater.total_in() - in_before).unwrap_or(usize::MAX);
        let produced = usize::try_from(inflater.total_out() - out_before).unwrap_or(usize::MAX);

        input.consume(consumed);
        output.write_all(&buf[..produced]).map_err(transform)?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError if eof && produced == 0 => {
                return Err(transform(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "unexpected EOF",
                )));
            }
            Status::Ok | Status::BufError => {}
        }
    }

    log::info!(
        "decompressed {} bytes into {} bytes",
        inflater.total_in(),
        inflater.total_out()
    );

    Ok(inflater.total_out())
}
