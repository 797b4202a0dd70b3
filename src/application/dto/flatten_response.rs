use crate::sbom_flattening::domain::ComponentRecord;
use std::path::PathBuf;

/// A document that could not be read or parsed, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    pub path: PathBuf,
    pub reason: String,
}

/// FlattenResponse - Response DTO from the flattening use case
#[derive(Debug, Clone)]
pub struct FlattenResponse {
    /// Flattened records in traversal order
    pub records: Vec<ComponentRecord>,
    /// Documents that were parsed and folded into the table
    pub documents_processed: usize,
    /// Documents skipped because they could not be read or parsed
    pub failed_documents: Vec<FailedDocument>,
}

impl FlattenResponse {
    pub fn new(
        records: Vec<ComponentRecord>,
        documents_processed: usize,
        failed_documents: Vec<FailedDocument>,
    ) -> Self {
        Self {
            records,
            documents_processed,
            failed_documents,
        }
    }

    pub fn root_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_root()).count()
    }

    pub fn dependency_count(&self) -> usize {
        self.records.len() - self.root_count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_documents.is_empty()
    }
}
