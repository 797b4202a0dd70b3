/// Domain layer: flattening nested SBOM documents into component records
pub mod domain;
pub mod services;
