/// Application layer - Use cases and DTOs
///
/// Orchestrates the flattening domain service and talks to infrastructure
/// only through the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
