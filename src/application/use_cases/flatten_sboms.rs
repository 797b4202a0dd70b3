use crate::application::dto::{FailedDocument, FlattenRequest, FlattenResponse};
use crate::ports::outbound::{ProgressReporter, SbomDocumentSource};
use crate::sbom_flattening::services::SbomFlattener;
use crate::shared::error::FlattenError;
use crate::shared::Result;
use std::path::Path;

/// FlattenSbomsUseCase - Core use case turning an SBOM tree into one table
///
/// Discovers documents through the injected [`SbomDocumentSource`], feeds them
/// to a fresh [`SbomFlattener`] strictly in discovery order, and collects
/// per-file failures instead of aborting (unless the request asks to fail fast).
///
/// # Type Parameters
/// * `S` - SbomDocumentSource implementation
/// * `PR` - ProgressReporter implementation
pub struct FlattenSbomsUseCase<S, PR> {
    document_source: S,
    progress_reporter: PR,
}

impl<S, PR> FlattenSbomsUseCase<S, PR>
where
    S: SbomDocumentSource,
    PR: ProgressReporter,
{
    /// Creates a new FlattenSbomsUseCase with injected dependencies
    pub fn new(document_source: S, progress_reporter: PR) -> Self {
        Self {
            document_source,
            progress_reporter,
        }
    }

    /// Executes the flattening use case
    ///
    /// # Returns
    /// FlattenResponse with every record produced from the readable documents
    ///
    /// # Errors
    /// Returns an error if the root cannot be traversed, or, with
    /// `fail_fast`, as soon as one directory or document cannot be read
    pub fn execute(&self, request: FlattenRequest) -> Result<FlattenResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Scanning for SBOM documents in: {}",
            request.root_path.display()
        ));

        let discovery = self.document_source.discover_documents(&request.root_path)?;
        let paths = discovery.documents;
        self.progress_reporter
            .report(&format!("✅ Found {} SBOM document(s)", paths.len()));

        let mut flattener = SbomFlattener::new();
        let mut documents_processed = 0;
        let mut failed_documents = Vec::new();

        for (path, reason) in discovery.unreadable {
            if request.fail_fast {
                return Err(FlattenError::TraversalError {
                    path,
                    details: reason,
                }
                .into());
            }
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Could not scan {}: {}",
                path.display(),
                reason
            ));
            failed_documents.push(FailedDocument { path, reason });
        }

        for (position, path) in paths.iter().enumerate() {
            self.progress_reporter.report_progress(
                position + 1,
                paths.len(),
                Some(&display_name(path, &request.root_path)),
            );

            match self.document_source.read_document(path) {
                Ok(document) => {
                    let outcome = flattener.process(&document);
                    if outcome.misaligned_hashes > 0 {
                        self.progress_reporter.report_error(&format!(
                            "⚠️  Warning: {}: {} component(s) list a different number of hash algorithms and digests",
                            path.display(),
                            outcome.misaligned_hashes
                        ));
                    }
                    documents_processed += 1;
                }
                Err(e) if request.fail_fast => return Err(e),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Skipping {}: {}",
                        path.display(),
                        first_line(&e.to_string())
                    ));
                    failed_documents.push(FailedDocument {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let response =
            FlattenResponse::new(flattener.finalize(), documents_processed, failed_documents);
        self.report_summary(&response);
        Ok(response)
    }

    fn report_summary(&self, response: &FlattenResponse) {
        let mut summary = format!(
            "✅ Flattened {} document(s) into {} record(s) ({} root, {} dependency)",
            response.documents_processed,
            response.records.len(),
            response.root_count(),
            response.dependency_count()
        );
        if response.has_failures() {
            summary.push_str(&format!(
                "\n⚠️  {} document(s) could not be processed",
                response.failed_documents.len()
            ));
        }
        self.progress_reporter.report_completion(&summary);
    }
}

fn display_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::DocumentDiscovery;
    use crate::sbom_flattening::domain::SbomDocument;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MockDocumentSource {
        order: Vec<PathBuf>,
        documents: HashMap<PathBuf, Option<serde_json::Value>>,
        unreadable: Vec<(PathBuf, String)>,
    }

    impl MockDocumentSource {
        fn new() -> Self {
            Self {
                order: Vec::new(),
                documents: HashMap::new(),
                unreadable: Vec::new(),
            }
        }

        fn with_unreadable_dir(mut self, path: &str) -> Self {
            self.unreadable
                .push((PathBuf::from(path), "Permission denied".to_string()));
            self
        }

        fn with_document(mut self, path: &str, value: serde_json::Value) -> Self {
            self.order.push(PathBuf::from(path));
            self.documents.insert(PathBuf::from(path), Some(value));
            self
        }

        fn with_broken(mut self, path: &str) -> Self {
            self.order.push(PathBuf::from(path));
            self.documents.insert(PathBuf::from(path), None);
            self
        }
    }

    impl SbomDocumentSource for MockDocumentSource {
        fn discover_documents(&self, _root: &Path) -> Result<DocumentDiscovery> {
            Ok(DocumentDiscovery {
                documents: self.order.clone(),
                unreadable: self.unreadable.clone(),
            })
        }

        fn read_document(&self, path: &Path) -> Result<SbomDocument> {
            match self.documents.get(path) {
                Some(Some(value)) => Ok(SbomDocument::new(value.clone())),
                _ => anyhow::bail!("Failed to parse SBOM file: {}", path.display()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
        completions: RefCell<Vec<String>>,
    }

    impl ProgressReporter for &RecordingReporter {
        fn report(&self, _message: &str) {}

        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, message: &str) {
            self.completions.borrow_mut().push(message.to_string());
        }
    }

    fn app(name: &str, bom_ref: &str) -> serde_json::Value {
        json!({
            "metadata": { "component": { "name": name, "version": "1.0", "bom-ref": bom_ref } },
            "components": [{ "name": "libfoo", "version": "2.0" }]
        })
    }

    #[test]
    fn test_execute_processes_documents_in_order() {
        let source = MockDocumentSource::new()
            .with_document("a.json", app("App", "app-1"))
            .with_document("b.json", app("Gateway", "gw-1"));
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let response = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), false))
            .unwrap();

        assert_eq!(response.documents_processed, 2);
        assert_eq!(response.records.len(), 4);
        assert_eq!(response.records[0].component_name, "App");
        assert_eq!(response.records[2].component_name, "Gateway");
        assert_eq!(response.root_count(), 2);
        assert_eq!(response.dependency_count(), 2);
        assert!(!response.has_failures());
        assert!(reporter.completions.borrow()[0].contains("4 record(s)"));
    }

    #[test]
    fn test_execute_skips_broken_documents() {
        let source = MockDocumentSource::new()
            .with_document("a.json", app("App", "app-1"))
            .with_broken("broken.json")
            .with_document("c.json", app("Gateway", "gw-1"));
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let response = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), false))
            .unwrap();

        assert_eq!(response.documents_processed, 2);
        assert_eq!(response.records.len(), 4);
        assert_eq!(response.failed_documents.len(), 1);
        assert_eq!(response.failed_documents[0].path, PathBuf::from("broken.json"));
        assert!(reporter.errors.borrow()[0].contains("broken.json"));
        assert!(reporter.completions.borrow()[0].contains("could not be processed"));
    }

    #[test]
    fn test_execute_fail_fast_aborts() {
        let source = MockDocumentSource::new()
            .with_document("a.json", app("App", "app-1"))
            .with_broken("broken.json");
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let err = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), true))
            .unwrap_err();
        assert!(err.to_string().contains("broken.json"));
        assert!(reporter.completions.borrow().is_empty());
    }

    #[test]
    fn test_execute_warns_on_misaligned_hashes() {
        let source = MockDocumentSource::new().with_document(
            "a.json",
            json!({
                "metadata": { "component": {
                    "name": "App", "version": "1.0",
                    "hashes": [{ "alg": "SHA-256" }]
                }}
            }),
        );
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let response = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), false))
            .unwrap();

        assert!(!response.has_failures());
        assert_eq!(reporter.errors.borrow().len(), 1);
        assert!(reporter.errors.borrow()[0].contains("1 component(s)"));
    }

    #[test]
    fn test_execute_reports_unreadable_directories() {
        let source = MockDocumentSource::new()
            .with_document("a.json", app("App", "app-1"))
            .with_unreadable_dir("locked");
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let response = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), false))
            .unwrap();

        assert_eq!(response.documents_processed, 1);
        assert_eq!(response.records.len(), 2);
        assert!(response.has_failures());
        assert_eq!(response.failed_documents[0].path, PathBuf::from("locked"));
        assert!(reporter.errors.borrow()[0].contains("Could not scan locked"));
    }

    #[test]
    fn test_execute_fail_fast_on_unreadable_directory() {
        let source = MockDocumentSource::new()
            .with_document("a.json", app("App", "app-1"))
            .with_unreadable_dir("locked");
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(source, &reporter);

        let err = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), true))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to scan directory: locked"));
    }

    #[test]
    fn test_execute_empty_tree() {
        let reporter = RecordingReporter::default();
        let use_case = FlattenSbomsUseCase::new(MockDocumentSource::new(), &reporter);

        let response = use_case
            .execute(FlattenRequest::new(PathBuf::from("."), false))
            .unwrap();
        assert!(response.records.is_empty());
        assert_eq!(response.documents_processed, 0);
    }

    #[test]
    fn test_display_name_strips_root() {
        assert_eq!(
            display_name(Path::new("/sboms/unit/a.json"), Path::new("/sboms")),
            PathBuf::from("unit").join("a.json").display().to_string()
        );
        assert_eq!(display_name(Path::new("x.json"), Path::new("/other")), "x.json");
    }
}
