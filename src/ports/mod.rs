/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe everything the flattening use case needs
/// from the outside world: document discovery, formatting, presentation and
/// progress reporting.
pub mod outbound;
