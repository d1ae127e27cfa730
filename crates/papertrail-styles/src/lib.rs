//! Citation formatting for papertrail
//!
//! This crate renders [`CitationRecord`]s as text in three styles:
//! - Vancouver: numbered, `Last FM` authors, capped at six
//! - APA: `Last, F. M.` authors, year after the authors, DOI as a link
//! - MLA: first author only, quoted title
//!
//! The styles share one formatter driven by a per-style rules table
//! (see [`style`]). [`render`] concatenates formatted entries into a
//! bibliography document.
//!
//! [`CitationRecord`]: papertrail_domain::CitationRecord

pub mod bibliography;
pub mod formatter;
pub mod names;
pub mod style;

pub use bibliography::{export_file_name, render, Bibliography};
pub use formatter::{format_citation, StyleFormatter};
pub use names::{AuthorList, NameForm};
pub use style::{CitationStyle, StyleRules, UnknownStyle};
