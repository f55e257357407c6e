//! Catalog snapshot: the full record set read from a single JSON file.

pub mod loader;

pub use loader::{HealthStatus, Snapshot, SnapshotLoader};
