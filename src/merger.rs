use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{self, Path, PathBuf};

/// Name of the cumulative output file, created in the working directory.
pub const OUTPUT_FILE_NAME: &str = "saida.txt";

const SEPARATOR: &str = "----------------";

/// Explicit input/output pair for one merge run; the merger never consults
/// the working directory itself.
pub struct MergeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Merges `config.input` into `config.output`. A directory is listed one
/// level deep and processed in name order; the output file is opened in
/// append mode, so consecutive runs accumulate.
pub fn merge(config: &MergeConfig) -> io::Result<()> {
    let input = path::absolute(&config.input)?;

    // lstat, not stat: a missing path surfaces here, and symlinked entries
    // are skipped later rather than followed.
    if fs::symlink_metadata(&input)?.is_dir() {
        let mut entries = fs::read_dir(&input)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for entry in entries {
            append_file(&entry.path(), &config.output)?;
        }
    } else {
        append_file(&input, &config.output)?;
    }

    println!("Merged output written to {}", config.output.display());
    Ok(())
}

fn append_file(path: &Path, output: &Path) -> io::Result<()> {
    // Only regular files contribute a block; subdirectories and symlinks
    // are skipped silently.
    if !fs::symlink_metadata(path)?.is_file() {
        return Ok(());
    }

    let contents = fs::read_to_string(path)?;
    let name = path.file_name().unwrap_or_default().to_string_lossy();

    let mut file = OpenOptions::new().create(true).append(true).open(output)?;
    write!(file, "arquivo {}:\n{}\n\n{}\n\n", name, contents, SEPARATOR)?;

    println!("Added file: {}", path.display());
    Ok(())
}
