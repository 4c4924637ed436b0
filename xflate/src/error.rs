//! Error types for xflate operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{MAX_LEVEL, MIN_LEVEL};

/// Failures produced while resolving command-line tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Token starts with `-` but names no known flag
    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    /// Flag value could not be parsed
    #[error("invalid argument {value:?} for {flag}")]
    InvalidValue {
        /// Flag as written by the user
        flag: String,
        /// Offending value
        value: String,
    },

    /// Integer flag given as the last token without a value
    #[error("flag needs an argument: {flag}")]
    MissingValue {
        /// Flag as written by the user
        flag: String,
    },

    /// Test mode combined with an explicit compress or decompress flag
    #[error("conflicting flags: use test mode without compress or decompress")]
    TestConflict,

    /// Compress and decompress explicitly set to the same value
    #[error("conflicting flags -z={compress} and -d={decompress}")]
    Conflicting {
        /// Value given to the compress flag
        compress: bool,
        /// Value given to the decompress flag
        decompress: bool,
    },

    /// More than one file name given in test mode
    #[error("too many file names for test mode")]
    TooManyTestFiles,

    /// More than two file names given
    #[error("too many file arguments")]
    TooManyFiles,

    /// Decompressing a single file without the `.deflate` suffix
    #[error("{0}: unable to guess 2nd file name")]
    CannotGuessOutput(String),

    /// Input and output name the same file
    #[error("{0}: files must be different")]
    SameFiles(String),
}

/// Stage of a transform that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Setting up the compressor
    CreatingWriter,
    /// Feeding data through the compressor
    Compressing,
    /// Flushing the final compressed block
    Closing,
    /// Feeding data through the decompressor
    Decompressing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::CreatingWriter => "creating writer",
            Phase::Compressing => "compressing",
            Phase::Closing => "closing",
            Phase::Decompressing => "decompressing",
        })
    }
}

/// Failures produced while running the stream pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("{path}: {source}")]
    OpenInput {
        /// Path to the input file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists and overwriting was not forced
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Compression level outside the supported range
    #[error(
        "{}: invalid compression level {level}: want value in range [{}, {}]",
        Phase::CreatingWriter,
        MIN_LEVEL,
        MAX_LEVEL
    )]
    InvalidCompressionLevel {
        /// The rejected level
        level: i32,
    },

    /// Compression or decompression failed
    #[error("{phase}: {source}")]
    Transform {
        /// Stage that failed
        phase: Phase,
        /// Underlying error from the DEFLATE engine or the streams
        #[source]
        source: io::Error,
    },

    /// Flushing or closing the output failed
    #[error("closing output {target}: {source}")]
    CloseOutput {
        /// Display form of the output target
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of a single invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line
    #[error(transparent)]
    Args(#[from] ArgError),

    /// Runtime failure
    #[error(transparent)]
    Run(#[from] Error),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Args(_) => 2,
            CliError::Run(_) => 1,
        }
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}
