use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::AppError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Read a transcript to a string.
    ///
    /// A missing file is reported as [`AppError::InputFileNotFound`] so callers
    /// can tell it apart from other read failures.
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(AppError::InputFileNotFound(path.to_path_buf()).into())
            }
            Err(e) => Err(AppError::from(e))
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    /// Write a string to a file, creating or truncating it.
    ///
    /// The parent directory must already exist.
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        fs::write(&path, content)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to write to file: {}", path.as_ref().display()))?;

        Ok(())
    }
}
