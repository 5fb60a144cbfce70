//! Catalog store boundary.
//!
//! [`CatalogStore`] is the persistence contract for the link directory: CRUD
//! on listings, click recording, and category listing. Two implementations
//! exist:
//!
//! - [`RestStore`] — the remote PostgREST-style store
//! - [`MemoryStore`] — the seeded in-memory fallback for static data mode
//!   and tests
//!
//! Category `count` maintenance is a store concern: implementations bump the
//! cached count on add/update/delete so readers never recompute it.

pub mod error;
pub mod memory;
pub mod rest;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::{RestConfig, RestStore};

use async_trait::async_trait;
use linkdex_core::model::{Category, NewWebsite, Website, WebsiteUpdate};

/// Persistence operations for the link directory.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All listings, most recently updated first.
    async fn list_websites(&self) -> Result<Vec<Website>, StoreError>;

    /// Persist a new listing: assigns an id, resolves an icon, and bumps the
    /// category count.
    ///
    /// # Errors
    ///
    /// `StoreError::Duplicate` when the listing URL already exists.
    async fn add_website(&self, website: NewWebsite) -> Result<Website, StoreError>;

    /// Apply a partial update. A category change moves the cached counts; a
    /// URL change re-resolves the icon.
    async fn update_website(&self, id: &str, update: WebsiteUpdate) -> Result<(), StoreError>;

    /// Remove a listing and decrement its category count.
    async fn delete_website(&self, id: &str) -> Result<(), StoreError>;

    /// Increment the click counter for a listing.
    async fn record_click(&self, id: &str) -> Result<(), StoreError>;

    /// All category definitions, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}
