use std::path::PathBuf;

/// FlattenRequest - Request DTO for the flattening use case
#[derive(Debug, Clone)]
pub struct FlattenRequest {
    /// Directory tree searched for SBOM documents
    pub root_path: PathBuf,
    /// Abort on the first unreadable or malformed document instead of skipping it
    pub fail_fast: bool,
}

impl FlattenRequest {
    pub fn new(root_path: PathBuf, fail_fast: bool) -> Self {
        Self {
            root_path,
            fail_fast,
        }
    }
}
