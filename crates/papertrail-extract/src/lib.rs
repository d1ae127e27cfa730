//! Citation metadata extraction from web pages
//!
//! This crate turns raw HTML into a [`CitationRecord`]:
//! - Declarative per-field fallback chains over meta tags (`rules`)
//! - A parser-independent lookup trait with a `scraper` implementation (`source`)
//! - A single bounded, blocking page fetch (`fetch`)
//!
//! Extraction itself never fails. The only error is [`FetchError`], raised
//! when page content could not be retrieved.
//!
//! [`CitationRecord`]: papertrail_domain::CitationRecord

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod rules;
pub mod source;

pub use config::ExtractorConfig;
pub use error::{FetchError, Result};
pub use extractor::{extract, extract_from_source, MetadataExtractor};
pub use fetch::{validate_url, HttpFetcher, PageFetcher};
pub use rules::{Field, FieldRules, Pattern, Rule};
pub use source::{HtmlDocument, MetaSource};
