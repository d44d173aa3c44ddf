pub mod content_repository;
pub mod weight_repository;

pub use content_repository::PgContentRepository;
pub use weight_repository::PgWeightRepository;
