pub mod graph_walker;
pub mod license_resolver;

pub use graph_walker::GraphWalker;
pub use license_resolver::LicenseResolver;
