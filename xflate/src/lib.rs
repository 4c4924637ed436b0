//! Compress or decompress raw DEFLATE streams.
//!
//! The crate backs the `xflate` command. Command-line tokens are resolved into
//! an [`Action`] by [`resolve`], and [`run_action`] streams the input through
//! the DEFLATE engine into the output. [`run_cli`] ties both together and maps
//! the outcome to a process exit status.

pub mod args;
pub mod config;
pub mod error;
pub mod help;
pub mod io;
pub mod operations;
pub mod process;


pub use args::{parse_bool, resolve, resolve_with, Resolved};
pub use config::{
    Action, Mode, Target, DEFAULT_BUFFER_SIZE, DEFAULT_LEVEL, DEFLATE_SUFFIX, MAX_LEVEL, MIN_LEVEL,
    PROGRAM_NAME, STREAM_SENTINEL,
};
pub use error::{ArgError, CliError, Error, Phase, Result};
pub use help::{print_usage, usage};
pub use io::{open_input, open_output};
pub use operations::{compress_stream, compression_for, decompress_stream};
pub use process::{execute, init_logging, run_action, run_cli};
