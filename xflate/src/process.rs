//! High-level invocation handling and stream pipeline orchestration.

use std::io::{self, Write};

use crate::args::{resolve, Resolved};
use crate::config::{Action, Mode, PROGRAM_NAME};
use crate::error::{CliError, Error, Result};
use crate::help::print_usage;
use crate::io::{open_input, open_output};
use crate::operations::{compress_stream, compression_for, decompress_stream};

/// Installs the stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// informational messages as well when `verbose` is set. Calling this more
/// than once is harmless.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .format_timestamp(None)
        .try_init();
}

/// Runs the stream pipeline for a resolved action.
///
/// Opens the input, opens the output (exclusively unless `force` is set),
/// pushes the data through the DEFLATE transform and flushes the output.
/// Test mode decompresses into a discarding sink.
///
/// # Returns
///
/// The number of uncompressed bytes that went through the transform.
///
/// # Errors
///
/// Returns the first failure from opening, transforming or closing.
/// A partially written output file is left in place.
pub fn run_action(action: &Action) -> Result<u64> {
    log::debug!("running {action:?}");

    // Reject a bad level before anything is created on disk
    if action.mode == Mode::Compress {
        compression_for(action.level)?;
    }

    let input = open_input(&action.input)?;
    let mut output = open_output(&action.output, action.force)?;

    let bytes = match action.mode {
        Mode::Compress => compress_stream(input, &mut output, action.level)?,
        Mode::Decompress | Mode::Test => decompress_stream(input, &mut output)?,
    };

    output.flush().map_err(|source| Error::CloseOutput {
        target: action.output.to_string(),
        source,
    })?;

    if action.mode == Mode::Test {
        log::info!("{}: OK", action.input);
    }

    Ok(bytes)
}

/// Resolves `tokens` and carries out the result.
///
/// Help is printed to stdout. Nothing is reported to stderr here.
///
/// # Errors
///
/// Returns [`CliError::Args`] for a bad command line and [`CliError::Run`]
/// for failures of the pipeline.
pub fn execute<S: AsRef<str>>(tokens: &[S]) -> std::result::Result<(), CliError> {
    let action = match resolve(tokens)? {
        Resolved::Help => {
            print_usage(io::stdout().lock()).map_err(Error::from)?;
            return Ok(());
        }
        Resolved::Run(action) => action,
    };

    init_logging(action.verbose);
    run_action(&action)?;

    Ok(())
}

/// Runs one invocation and reports failures on stderr.
///
/// # Returns
///
/// The process exit status: `0` on success or help, `2` for a bad command
/// line (followed by the usage text), `1` for I/O or stream failures.
pub fn run_cli<S: AsRef<str>>(tokens: &[S]) -> i32 {
    match execute(tokens) {
        Ok(()) => 0,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {err}");
            if let CliError::Args(_) = err {
                let _ = print_usage(&mut stderr);
            }
            err.exit_code()
        }
    }
}
