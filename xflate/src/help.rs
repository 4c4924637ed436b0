//! Usage text.
//!
//! Tokens are resolved by [`crate::args`]; the clap command here only
//! describes the same flags so the help output stays in one familiar layout.

use std::io::{self, Write};

use clap::{Arg, ArgAction, Command};

use crate::config::{DEFAULT_LEVEL, DEFLATE_SUFFIX, MAX_LEVEL, MIN_LEVEL, PROGRAM_NAME};

fn bool_flag(id: &'static str, short: char, help: String) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .value_name("BOOL")
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .help(help)
}

/// Describes the command line for help rendering.
pub fn command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Compress or decompress a raw DEFLATE stream")
        .override_usage(format!("{PROGRAM_NAME} [FLAGS] [FILE1] [FILE2]"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(bool_flag("compress", 'z', "compress (default true)".to_string()))
        .arg(bool_flag("decompress", 'd', "decompress".to_string()))
        .arg(
            Arg::new("level")
                .short('n')
                .long("level")
                .value_name("N")
                .allow_negative_numbers(true)
                .help(format!(
                    "compression level, {MIN_LEVEL}..{MAX_LEVEL}; -N is a shorthand (default {DEFAULT_LEVEL})"
                )),
        )
        .arg(bool_flag("force", 'f', "force overwriting FILE2".to_string()))
        .arg(bool_flag(
            "test",
            't',
            "test compressed FILE1 (no output written)".to_string(),
        ))
        .arg(bool_flag(
            "verbose",
            'v',
            "report progress on stderr (see also RUST_LOG)".to_string(),
        ))
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("show this help and exit"),
        )
        .arg(Arg::new("FILE1").help("input file, - for standard input"))
        .arg(Arg::new("FILE2").help("output file, - for standard output"))
        .after_help(format!(
            "With only FILE1, compressing writes FILE1{DEFLATE_SUFFIX} and decompressing \
             FILE1{DEFLATE_SUFFIX} writes FILE1.\nFILE1 is never deleted."
        ))
}

/// Renders the usage text.
pub fn usage() -> String {
    command().render_help().to_string()
}

/// Writes the usage text to `out`.
pub fn print_usage(mut out: impl Write) -> io::Result<()> {
    out.write_all(usage().as_bytes())?;
    out.flush()
}
