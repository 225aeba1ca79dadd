/// License walk domain: value objects, excerpt policy, and the walker and
/// resolver services. Nothing in here performs I/O directly; network access
/// goes through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
