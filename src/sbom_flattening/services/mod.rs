mod sbom_flattener;

pub use sbom_flattener::{ProcessOutcome, SbomFlattener};
