pub mod license_excerpt;

pub use license_excerpt::{LicenseExcerpt, ELLIPSIS, EXCERPT_LENGTH};
