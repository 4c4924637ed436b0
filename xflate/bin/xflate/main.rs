//! Raw DEFLATE compression utility
//!
//! Compresses or decompresses a raw DEFLATE stream between files or the
//! standard streams.

use std::process;

use xflate::run_cli;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    process::exit(run_cli(&args));
}
