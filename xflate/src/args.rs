//! Command-line token resolution.
//!
//! Turns the raw argument list (without the program name) into an [`Action`]
//! or a help request. Tokens are scanned once, left to right; the first
//! error is kept while scanning continues so that a later `-h` still wins.

use crate::config::{Action, Mode, Target, DEFLATE_SUFFIX, STREAM_SENTINEL};
use crate::error::ArgError;

/// Outcome of resolving the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Run the stream pipeline with this action
    Run(Action),
    /// Print usage text and exit successfully
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Compress,
    Decompress,
    Level,
    Force,
    Test,
    Verbose,
    Help,
}

/// Known flags as (flag, short name, long name).
const FLAGS: &[(Flag, char, &str)] = &[
    (Flag::Compress, 'z', "compress"),
    (Flag::Decompress, 'd', "decompress"),
    (Flag::Level, 'n', "level"),
    (Flag::Force, 'f', "force"),
    (Flag::Test, 't', "test"),
    (Flag::Verbose, 'v', "verbose"),
    (Flag::Help, 'h', "help"),
];

fn lookup(name: &str) -> Option<Flag> {
    if let Some(long) = name.strip_prefix("--") {
        FLAGS
            .iter()
            .find_map(|&(flag, _, l)| (l == long).then_some(flag))
    } else {
        let short = name.strip_prefix('-')?;
        let mut chars = short.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        FLAGS
            .iter()
            .find_map(|&(flag, s, _)| (s == c).then_some(flag))
    }
}

/// Parses a boolean flag value.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Values seen while scanning; `None` means the flag was not given.
#[derive(Debug, Default)]
struct Scan {
    compress: Option<bool>,
    decompress: Option<bool>,
    test: Option<bool>,
    force: Option<bool>,
    verbose: Option<bool>,
    level: Option<i32>,
    files: Vec<String>,
    error: Option<ArgError>,
}

impl Scan {
    fn fail(&mut self, err: ArgError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// Resolves tokens against [`Action::DEFAULT`].
///
/// # Errors
///
/// Returns the first [`ArgError`] encountered, unless help was requested.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Resolved, ArgError> {
    resolve_with(&Action::DEFAULT, tokens)
}

/// Resolves tokens, falling back to `defaults` for anything not given.
///
/// A lone `-d=<bool>` selects the mode by itself: `-d=false` means compress
/// even when `defaults` decompresses. The default mode only applies when
/// neither `-z` nor `-d` appears.
///
/// # Errors
///
/// Returns the first [`ArgError`] encountered, unless help was requested.
pub fn resolve_with<S: AsRef<str>>(
    defaults: &Action,
    tokens: &[S],
) -> Result<Resolved, ArgError> {
    let mut scan = Scan::default();
    let mut flags_done = false;
    let mut tokens = tokens.iter().map(AsRef::<str>::as_ref);

    while let Some(token) = tokens.next() {
        if flags_done || token == STREAM_SENTINEL || !token.starts_with('-') {
            scan.files.push(token.to_string());
            continue;
        }
        if token == "--" {
            flags_done = true;
            continue;
        }

        let (name, value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };

        let Some(flag) = lookup(name) else {
            if token.starts_with("--") {
                scan.fail(ArgError::UnknownFlag(token.to_string()));
            } else if let Some(value) = token.strip_prefix("-n") {
                // `-n3` attaches the level to the short flag
                match value.parse::<i32>() {
                    Ok(level) => scan.level = Some(level),
                    Err(_) => scan.fail(ArgError::InvalidValue {
                        flag: "-n".to_string(),
                        value: value.to_string(),
                    }),
                }
            } else {
                // `-6` is shorthand for `--level=6`
                match token[1..].parse::<i32>() {
                    Ok(level) => scan.level = Some(level),
                    Err(_) => scan.fail(ArgError::UnknownFlag(token.to_string())),
                }
            }
            continue;
        };

        if flag == Flag::Level {
            let value = match value {
                Some(value) => value,
                None => match tokens.next() {
                    Some(next) => next,
                    None => {
                        scan.fail(ArgError::MissingValue {
                            flag: name.to_string(),
                        });
                        continue;
                    }
                },
            };
            match value.parse::<i32>() {
                Ok(level) => scan.level = Some(level),
                Err(_) => scan.fail(ArgError::InvalidValue {
                    flag: name.to_string(),
                    value: value.to_string(),
                }),
            }
            continue;
        }

        let on = match value {
            None => true,
            Some(value) => match parse_bool(value) {
                Some(on) => on,
                None => {
                    scan.fail(ArgError::InvalidValue {
                        flag: name.to_string(),
                        value: value.to_string(),
                    });
                    continue;
                }
            },
        };

        match flag {
            Flag::Help if on => return Ok(Resolved::Help),
            Flag::Help => {}
            Flag::Compress => scan.compress = Some(on),
            Flag::Decompress => scan.decompress = Some(on),
            Flag::Force => scan.force = Some(on),
            Flag::Test => scan.test = Some(on),
            Flag::Verbose => scan.verbose = Some(on),
            // consumed above
            Flag::Level => {}
        }
    }

    if let Some(err) = scan.error {
        return Err(err);
    }

    finish(defaults, scan).map(Resolved::Run)
}

/// Applies cross-flag validation and file name inference.
fn finish(defaults: &Action, scan: Scan) -> Result<Action, ArgError> {
    let test = scan.test.unwrap_or(defaults.mode == Mode::Test);
    if test && (scan.compress.is_some() || scan.decompress.is_some()) {
        return Err(ArgError::TestConflict);
    }

    let mut action = Action {
        mode: defaults.mode,
        level: scan.level.unwrap_or(defaults.level),
        force: scan.force.unwrap_or(defaults.force),
        verbose: scan.verbose.unwrap_or(defaults.verbose),
        input: Target::Stdio,
        output: Target::Stdio,
    };

    if test {
        action.mode = Mode::Test;
        action.output = Target::Discard;
        action.input = match scan.files.as_slice() {
            [] => Target::Stdio,
            [file] => Target::from_token(file),
            _ => return Err(ArgError::TooManyTestFiles),
        };
        return Ok(action);
    }

    let compress = match (scan.compress, scan.decompress) {
        (Some(z), Some(d)) if z == d => {
            return Err(ArgError::Conflicting {
                compress: z,
                decompress: d,
            })
        }
        (Some(z), _) => z,
        (None, Some(d)) => !d,
        (None, None) => defaults.mode != Mode::Decompress,
    };
    action.mode = if compress {
        Mode::Compress
    } else {
        Mode::Decompress
    };

    let (input, output) = match scan.files.as_slice() {
        [] => (Target::Stdio, Target::Stdio),
        [file] if file == STREAM_SENTINEL => (Target::Stdio, Target::Stdio),
        [file] if compress => (
            Target::File(file.clone()),
            Target::File(format!("{file}{DEFLATE_SUFFIX}")),
        ),
        [file] => match file.strip_suffix(DEFLATE_SUFFIX) {
            Some(stem) if !stem.is_empty() => {
                (Target::File(file.clone()), Target::File(stem.to_string()))
            }
            _ => return Err(ArgError::CannotGuessOutput(file.clone())),
        },
        [first, second] => {
            if first == second && first != STREAM_SENTINEL {
                return Err(ArgError::SameFiles(first.clone()));
            }
            (Target::from_token(first), Target::from_token(second))
        }
        _ => return Err(ArgError::TooManyFiles),
    };
    action.input = input;
    action.output = output;

    Ok(action)
}
