use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a names file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a file holding one name per line
///
/// Line breaks may be `\n` or `\r\n`. A final line break does not add an
/// empty name, but blank lines elsewhere are kept as empty names.
pub fn load_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let names = parse_names(&content);
    tracing::debug!("Loaded {} names from {}", names.len(), path.display());

    Ok(names)
}

/// Split file content into names, one per line
pub fn parse_names(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
