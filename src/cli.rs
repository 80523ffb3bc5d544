use clap::{arg, command};
use std::env;
use std::io;
use std::path::PathBuf;

use crate::merger::{self, MergeConfig, OUTPUT_FILE_NAME};

pub fn run() -> io::Result<()> {
    let matches = command!()
        .about("Concatenate the files of a directory (or a single file) into one text file")
        .arg(arg!([PATH] "Path to a file or directory to merge").required(false))
        .get_matches();

    // The positional argument is optional at the clap level so that a missing
    // path is reported through the normal error path with exit status 1.
    let input = match matches.get_one::<String>("PATH") {
        Some(path) => PathBuf::from(path),
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "missing input path. Usage: merge-files <PATH>",
            ));
        }
    };

    let config = MergeConfig {
        input,
        output: env::current_dir()?.join(OUTPUT_FILE_NAME),
    };

    merger::merge(&config)
}
