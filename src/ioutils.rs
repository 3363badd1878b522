use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
/// Relative paths are resolved against the current directory.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(abs_path, content).map_err(Error::IoError)
}

/// Writes `content` to `dest_path` when given, otherwise to stdout.
pub fn write_output<P: AsRef<Path>>(content: &str, dest_path: Option<P>) -> Result<()> {
    match dest_path {
        Some(path) => write_file(content, path),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush().map_err(Error::IoError)
        }
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
