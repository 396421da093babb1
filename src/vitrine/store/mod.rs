//! # Storage Layer
//!
//! The [`DataStore`] trait is the single way commands reach catalog data. It works on
//! whole [`Catalog`] values: a command loads the catalog, works on the collection it
//! needs through [`CatalogItem::entries`](crate::model::CatalogItem::entries), and
//! saves the catalog back if it changed anything.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the catalog as one pretty-printed JSON document.
//! - [`memory::InMemoryStore`]: no persistence, used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── catalog.json   # projects, posts, certifications, contacts
//! └── config.json    # settings, see `config.rs`
//! ```
//!
//! A missing `catalog.json` loads as an empty catalog.

use crate::error::Result;
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load the full catalog.
    fn load(&self) -> Result<Catalog>;

    /// Replace the stored catalog.
    fn save(&mut self, catalog: &Catalog) -> Result<()>;
}
