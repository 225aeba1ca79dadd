/// Outbound adapters - npm registry, GitHub, terminal and file implementations
/// of the outbound ports
pub mod console;
pub mod filesystem;
pub mod formatters;
pub mod network;
