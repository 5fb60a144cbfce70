//! Client code for linkdex.
//!
//! This crate provides the async catalog-store boundary shared by the CLI
//! and any future frontends: the PostgREST-style remote store client, the
//! in-memory fallback store, favicon resolution, and the bulk-import driver.

pub mod favicon;
pub mod import;
pub mod store;

pub use import::{BulkReport, MAX_DISPLAYED_ERRORS, bulk_import};
pub use store::{CatalogStore, MemoryStore, RestStore, StoreError};
