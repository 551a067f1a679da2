use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::FilesError;

/// Writes project files under a base directory, creating parent
/// directories as needed. All paths are relative to `base_dir`.
pub struct FileWriter {
    base_dir: PathBuf,
}

impl FileWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The project root this writer targets. Exposed so callers can probe
    /// for the presence of files before deciding to rewrite them.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, rel_path: &str) -> PathBuf {
        self.base_dir.join(rel_path)
    }

    /// Write (create or overwrite) a UTF-8 text file.
    pub fn write_file(&self, rel_path: &str, content: &str) -> Result<(), FilesError> {
        let path = self.resolve(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FilesError::Internal(format!("mkdir {}: {e}", parent.display())))?;
        }
        fs::write(&path, content)
            .map_err(|e| FilesError::Internal(format!("write {}: {e}", path.display())))?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// Read a UTF-8 text file. Returns `FilesError::NotFound` if absent.
    pub fn read_file(&self, rel_path: &str) -> Result<String, FilesError> {
        let path = self.resolve(rel_path);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FilesError::NotFound(rel_path.to_string()))
            }
            Err(e) => Err(FilesError::Internal(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Check whether a file exists under the base directory.
    pub fn exists(&self, rel_path: &str) -> bool {
        self.resolve(rel_path).exists()
    }
}
