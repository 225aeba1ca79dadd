/// Use cases module containing application business logic orchestration
mod walk_licenses;

pub use walk_licenses::WalkLicensesUseCase;
