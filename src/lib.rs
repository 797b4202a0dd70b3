//! sbom-flatten - flatten CycloneDX SBOM trees into one component table
//!
//! Walks a directory of SBOM JSON documents and folds every document's root
//! component and declared dependencies into a single row-oriented dataset,
//! linking dependencies to their root through `depended_by_ref`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_flattening`): records, identity keys and the flattener
//! - **Application Layer** (`application`): the flattening use case and DTOs
//! - **Ports** (`ports`): interfaces for document sources, formatters and output
//! - **Adapters** (`adapters`): filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types, result alias and file security checks
//!
//! # Example
//!
//! ```no_run
//! use sbom_flatten::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = FlattenSbomsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//! let response = use_case.execute(FlattenRequest::new(PathBuf::from("sboms"), false))?;
//!
//! let csv = CsvFormatter::new().format(&response.records)?;
//! FileSystemWriter::new(PathBuf::from("components.csv")).present(&csv)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_flattening;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
    pub use crate::application::dto::{FailedDocument, FlattenRequest, FlattenResponse, OutputFormat};
    pub use crate::application::use_cases::FlattenSbomsUseCase;
    pub use crate::ports::outbound::{
        DocumentDiscovery, OutputPresenter, ProgressReporter, RecordFormatter,
        SbomDocumentSource,
    };
    pub use crate::sbom_flattening::domain::{
        ComponentKey, ComponentRecord, DependencyKey, RecordTable, SbomDocument, COLUMNS,
    };
    pub use crate::sbom_flattening::services::{ProcessOutcome, SbomFlattener};
    pub use crate::shared::Result;
}
