/// Ports module defining the seams of the license walker
///
/// Inbound ports are what the CLI drives (the walk use case); outbound
/// ports are what the walk needs from the outside world (registry,
/// repository host, terminal and files).
pub mod inbound;
pub mod outbound;
