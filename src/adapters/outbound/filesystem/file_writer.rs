use crate::ports::outbound::OutputPresenter;
use crate::shared::error::WalkerError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the license trees to a file
///
/// This adapter implements the OutputPresenter port for `--output`.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        WalkerError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Rejects a missing parent directory and an existing symlink target
    fn validate_target(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if let Ok(metadata) = fs::symlink_metadata(&self.output_path) {
            if metadata.is_symlink() {
                return Err(self.write_error(
                    "Security: Output path is a symbolic link. Writing through symbolic links is not allowed.",
                ));
            }
            if metadata.is_dir() {
                return Err(self.write_error("Output path is a directory"));
            }
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the license trees to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("licenses.txt");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("foo (MIT)\n\n").unwrap();

        let written_content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written_content, "foo (MIT)\n\n");
    }

    #[test]
    fn test_file_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("licenses.txt");
        fs::write(&output_path, "stale").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("fresh")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "fresh");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/licenses.txt");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("test content");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
        assert!(err_string.contains("Failed to write to file"));
    }

    #[test]
    fn test_file_writer_rejects_directory_target() {
        let temp_dir = TempDir::new().unwrap();

        let writer = FileSystemWriter::new(temp_dir.path().to_path_buf());
        let result = writer.present("test content");

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "original").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("hijacked");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        let result = presenter.present("");
        assert!(result.is_ok());
    }
}
