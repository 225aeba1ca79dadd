mod presenter_factory;
mod reporter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use reporter_factory::{ReporterFactory, ReporterType};
