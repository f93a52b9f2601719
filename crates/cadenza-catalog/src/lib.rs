// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory catalog store for the cadenza streaming domain.
//!
//! The store itself is synchronous and single-threaded. Callers that take
//! concurrent requests (the HTTP layer) wrap it in [`SharedCatalog`] and
//! hold the lock across each whole operation, so find-or-create sequences
//! never interleave.

use std::sync::{Arc, Mutex};

pub mod error;
pub mod store;

#[cfg(test)]
mod store_tests;

pub use error::{CatalogError, EntityKind, Result};
pub use store::Catalog;

/// A catalog behind a single mutual-exclusion lock, one operation at a time.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

pub fn shared(catalog: Catalog) -> SharedCatalog {
    Arc::new(Mutex::new(catalog))
}
