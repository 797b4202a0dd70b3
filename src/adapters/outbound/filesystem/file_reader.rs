use crate::ports::outbound::{DocumentDiscovery, SbomDocumentSource};
use crate::sbom_flattening::domain::SbomDocument;
use crate::shared::error::FlattenError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as SBOM documents unless configured otherwise
pub const DEFAULT_EXTENSIONS: &[&str] = &["json"];

/// FileSystemReader adapter for finding and loading SBOM files on disk
///
/// Walks the root directory recursively with entries sorted by file name,
/// so the traversal order (and with it the merge order) is the same on
/// every run. Symbolic links are never followed.
pub struct FileSystemReader {
    extensions: Vec<String>,
    /// Canonical path of a file never treated as input (the run's own output)
    excluded: Option<PathBuf>,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }

    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            excluded: None,
        }
    }

    /// Skips `path` during discovery. A path that does not exist yet excludes nothing.
    pub fn excluding(mut self, path: &Path) -> Self {
        self.excluded = fs::canonicalize(path).ok();
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        match &self.excluded {
            Some(excluded) => fs::canonicalize(path).is_ok_and(|p| p == *excluded),
            None => false,
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            })
    }

    /// Reads a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "SBOM file")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read SBOM file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomDocumentSource for FileSystemReader {
    fn discover_documents(&self, root: &Path) -> Result<DocumentDiscovery> {
        if !root.is_dir() {
            return Err(FlattenError::InvalidRootPath {
                path: root.to_path_buf(),
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        let mut discovery = DocumentDiscovery::default();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file()
                        && self.matches_extension(entry.path())
                        && !self.is_excluded(entry.path())
                    {
                        discovery.documents.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    discovery.unreadable.push((path, e.to_string()));
                }
            }
        }

        Ok(discovery)
    }

    fn read_document(&self, path: &Path) -> Result<SbomDocument> {
        let content = self
            .safe_read_file(path)
            .map_err(|e| FlattenError::SbomReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| FlattenError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(SbomDocument::new(value))
    }
}
