//! Citation record model for papertrail
//!
//! This crate provides the data shared by every other papertrail crate:
//! - CitationRecord: one bibliographic entry with fixed, optional fields
//! - SourceType: where the record came from (website, manual, ...)
//! - PersonName: "First [Middle] Last" author names split for formatting
//! - Validation of manually entered records

pub mod author;
pub mod record;
pub mod validation;

pub use author::*;
pub use record::*;
pub use validation::*;
