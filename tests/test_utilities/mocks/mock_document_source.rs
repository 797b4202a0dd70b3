use sbom_flatten::prelude::*;
use std::path::{Path, PathBuf};

/// Mock SbomDocumentSource serving in-memory JSON documents in insertion order
#[derive(Default)]
pub struct MockDocumentSource {
    documents: Vec<(PathBuf, Option<String>)>,
    unreadable_dirs: Vec<PathBuf>,
    discovery_fails: bool,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document whose content is parsed on read
    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.documents
            .push((PathBuf::from(path), Some(content.to_string())));
        self
    }

    /// Adds a document that fails to read
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.documents.push((PathBuf::from(path), None));
        self
    }

    /// Adds a directory the walk could not enter
    pub fn with_unreadable_dir(mut self, path: &str) -> Self {
        self.unreadable_dirs.push(PathBuf::from(path));
        self
    }

    pub fn with_discovery_failure() -> Self {
        Self {
            discovery_fails: true,
            ..Self::default()
        }
    }
}

impl SbomDocumentSource for MockDocumentSource {
    fn discover_documents(&self, _root: &Path) -> Result<DocumentDiscovery> {
        if self.discovery_fails {
            anyhow::bail!("Mock discovery failure");
        }
        Ok(DocumentDiscovery {
            documents: self.documents.iter().map(|(p, _)| p.clone()).collect(),
            unreadable: self
                .unreadable_dirs
                .iter()
                .map(|p| (p.clone(), "Mock permission denied".to_string()))
                .collect(),
        })
    }

    fn read_document(&self, path: &Path) -> Result<SbomDocument> {
        let content = self
            .documents
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, c)| c.as_ref())
            .ok_or_else(|| anyhow::anyhow!("Mock read failure: {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(content)?;
        Ok(SbomDocument::new(value))
    }
}
