/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod walk_request;
mod walk_response;

pub use walk_request::WalkRequest;
pub use walk_response::{PackageTree, WalkResponse};
