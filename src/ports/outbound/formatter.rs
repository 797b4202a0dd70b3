use crate::sbom_flattening::domain::ComponentRecord;
use crate::shared::Result;

/// RecordFormatter port for rendering the flattened table
///
/// Implementations turn the finished record list into a text document
/// (CSV, JSON, ...). Rows arrive in insertion order and must be kept in it.
pub trait RecordFormatter {
    /// Renders every record
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[ComponentRecord]) -> Result<String>;
}
