use crate::shared::Result;

/// OutputPresenter port for delivering the rendered table
///
/// Abstracts where the formatted output ends up (stdout, a file, ...).
pub trait OutputPresenter {
    /// Delivers the formatted table content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination cannot be written
    /// - The destination path fails security checks
    fn present(&self, content: &str) -> Result<()>;
}
