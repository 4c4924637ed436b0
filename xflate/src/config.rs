//! Configuration types and constants for xflate operations.

/// Program name used in messages and usage text
pub const PROGRAM_NAME: &str = "xflate";

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Suffix appended to compressed file names
pub const DEFLATE_SUFFIX: &str = ".deflate";

/// File name standing for stdin or stdout
pub const STREAM_SENTINEL: &str = "-";

/// Compression level used when none is given
pub const DEFAULT_LEVEL: i32 = 6;

/// Lowest accepted compression level
pub const MIN_LEVEL: i32 = -2;

/// Highest accepted compression level
pub const MAX_LEVEL: i32 = 9;

/// Represents the mutually exclusive modes of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compress input data
    Compress,
    /// Decompress input data
    Decompress,
    /// Decompress and discard the output, checking stream integrity
    Test,
}

/// Where a stream is read from or written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Standard input or standard output
    Stdio,
    /// A named file
    File(String),
    /// Output is discarded (test mode)
    Discard,
}

impl Target {
    /// Builds a target from a positional token, honouring the `-` sentinel.
    pub fn from_token(token: &str) -> Self {
        if token == STREAM_SENTINEL {
            Target::Stdio
        } else {
            Target::File(token.to_string())
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Stdio => f.write_str(STREAM_SENTINEL),
            Target::File(name) => f.write_str(name),
            Target::Discard => f.write_str("(discard)"),
        }
    }
}

/// A fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Operation mode
    pub mode: Mode,
    /// Compression level (-2..9)
    pub level: i32,
    /// Force overwrite of an existing output file
    pub force: bool,
    /// Verbose diagnostics on stderr
    pub verbose: bool,
    /// Source of the data
    pub input: Target,
    /// Destination of the data
    pub output: Target,
}

impl Action {
    /// Defaults applied before any token is read.
    pub const DEFAULT: Action = Action {
        mode: Mode::Compress,
        level: DEFAULT_LEVEL,
        force: false,
        verbose: false,
        input: Target::Stdio,
        output: Target::Stdio,
    };
}

impl Default for Action {
    fn default() -> Self {
        Self::DEFAULT
    }
}
