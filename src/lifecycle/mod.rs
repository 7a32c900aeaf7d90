//! Startup, wiring and shutdown of the store actors, plus tracing setup.

mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use self::tracing::setup_tracing;
