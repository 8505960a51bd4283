//! Catalog sources for modtrack.
//!
//! This crate provides a trait-based, read-only catalog interface with a
//! JSON directory implementation and an in-memory sample catalog. Progress
//! data is never written back.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_catalog;
pub mod sample;

pub use trait_::{CatalogSource, StorageError, Result};
pub use json_catalog::{load_catalog_file, JsonCatalog};
pub use sample::{sample_catalog, MemoryCatalog};
