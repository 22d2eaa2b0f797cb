pub mod catalog;
pub mod loader;

pub use catalog::{CatalogError, CatalogStore, Snapshot};
pub use loader::{CsvSnapshotLoader, SnapshotLoader};
