//! # papertrail-store
//!
//! SQLite-backed storage for [`CitationRecord`]s.
//!
//! The store assigns each record an integer id and a `date_added`
//! timestamp, and lists records back in insertion order. Formatting code
//! never touches the database; it receives the records `list_all` returns.
//!
//! [`CitationRecord`]: papertrail_domain::CitationRecord

mod error;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use schema::{Schema, SCHEMA_VERSION};
pub use store::CitationStore;
