/// Crate-wide result alias.
///
/// Structured failures are `WalkerError` values wrapped in `anyhow::Error`,
/// so callers that need to tell them apart can `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
