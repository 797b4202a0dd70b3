/// Data Transfer Objects for application layer
///
/// DTOs carry requests and results between the CLI and the use case,
/// keeping the domain layer free of CLI concerns.
mod flatten_request;
mod flatten_response;
mod output_format;

pub use flatten_request::FlattenRequest;
pub use flatten_response::{FailedDocument, FlattenResponse};
pub use output_format::OutputFormat;
