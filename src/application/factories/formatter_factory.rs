use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::RecordFormatter;

/// Factory for creating table formatters
///
/// Keeps the choice of formatter adapter out of the CLI: callers name an
/// [`OutputFormat`] and get back a trait object.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_flatten::application::dto::OutputFormat;
    /// use sbom_flatten::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// let csv = formatter.format(&[]).unwrap();
    /// assert!(csv.starts_with(",bom_ref,"));
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn RecordFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Generating CSV output...",
            OutputFormat::Json => "📝 Generating JSON output...",
        }
    }
}
