/// Type alias for Result with anyhow::Error as the error type.
/// Every layer returns this so errors from adapters and the domain compose with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
