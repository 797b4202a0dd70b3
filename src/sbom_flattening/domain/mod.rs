pub mod component_record;
pub mod identity;
pub mod record_table;
pub mod sbom_document;

pub use component_record::{ComponentRecord, COLUMNS};
pub use identity::{ComponentKey, DependencyKey};
pub use record_table::RecordTable;
pub use sbom_document::{DependencyComponent, HashList, RootComponent, SbomDocument};
