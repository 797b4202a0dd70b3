use crate::sbom_flattening::domain::SbomDocument;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Result of walking a root directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentDiscovery {
    /// Candidate SBOM files in traversal order
    pub documents: Vec<PathBuf>,
    /// Entries the walk could not enter, with the reason
    pub unreadable: Vec<(PathBuf, String)>,
}

/// SbomDocumentSource port for locating and loading SBOM documents
///
/// Discovery and loading are separate so a single unreadable or malformed
/// file can be reported and skipped without losing the rest of the tree.
pub trait SbomDocumentSource {
    /// Lists candidate SBOM files below `root`, in a stable traversal order
    ///
    /// Subdirectories that cannot be read are listed in
    /// [`DocumentDiscovery::unreadable`] instead of failing the walk.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory
    fn discover_documents(&self, root: &Path) -> Result<DocumentDiscovery>;

    /// Reads and parses one SBOM file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read, is a symbolic link or is too large
    /// - The file content is not valid JSON
    fn read_document(&self, path: &Path) -> Result<SbomDocument>;
}
