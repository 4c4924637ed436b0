//! Opening the input and output streams of an action.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::{Target, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Opens an input reader for the given target.
///
/// [`Target::Stdio`] reads standard input. [`Target::Discard`] yields an empty
/// stream.
pub fn open_input(target: &Target) -> Result<Box<dyn BufRead>> {
    match target {
        Target::Stdio => Ok(Box::new(io::stdin().lock())),
        Target::Discard => Ok(Box::new(io::empty())),
        Target::File(path) => {
            let file = File::open(path).map_err(|source| Error::OpenInput {
                path: path.clone(),
                source,
            })?;
            log::debug!("opened input {path}");
            Ok(Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)))
        }
    }
}

/// Opens an output writer for the given target.
///
/// Named files are created exclusively unless `force` is set, in which case an
/// existing file is truncated.
pub fn open_output(target: &Target, force: bool) -> Result<Box<dyn Write>> {
    match target {
        Target::Stdio => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Target::Discard => Ok(Box::new(io::sink())),
        Target::File(path) => {
            let file = create_file(Path::new(path), force)?;
            log::debug!("opened output {path} (force: {force})");
            Ok(Box::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)))
        }
    }
}

fn create_file(path: &Path, force: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    options.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Error::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            Error::CreateOutput {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
