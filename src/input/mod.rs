use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Read a UTF-8 text file, rejecting empty or whitespace-only content.
pub fn load_text_file(path: &str) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(PathBuf::from(path)));
    }

    Ok(content)
}

pub mod clipboard;
pub mod quotes;
