use crate::ports::outbound::RecordFormatter;
use crate::sbom_flattening::domain::ComponentRecord;
use crate::shared::Result;

/// JsonFormatter adapter producing the component table as a JSON array
///
/// Each element is one record keyed by column name; null cells stay `null`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, records: &[ComponentRecord]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(records)
            .map_err(|e| anyhow::anyhow!("Failed to serialize component records: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
