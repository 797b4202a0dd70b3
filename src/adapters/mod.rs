/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem access,
/// console progress output and table formatters.
pub mod outbound;
