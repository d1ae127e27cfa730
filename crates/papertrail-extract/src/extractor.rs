//! Citation metadata extraction

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::rules::{Field, FieldRules, Rule, ALL_FIELD_RULES};
use crate::source::{HtmlDocument, MetaSource};
use papertrail_domain::CitationRecord;

/// Build a citation record from page source.
///
/// Never fails: fields without a matching rule are left empty (or get
/// their chain's default, e.g. the current year).
pub fn extract(html: &str, source_url: &str) -> CitationRecord {
    let document = HtmlDocument::parse(html);
    extract_from_source(&document, source_url)
}

/// Build a citation record from any [`MetaSource`]
pub fn extract_from_source(source: &dyn MetaSource, source_url: &str) -> CitationRecord {
    let mut record = CitationRecord::website(source_url);

    for chain in ALL_FIELD_RULES {
        let Some(value) = resolve_field(&chain, source) else {
            continue;
        };
        match chain.field {
            Field::Title => record.title = value,
            Field::Authors => record.authors = value,
            Field::Year => record.year = Some(value),
            Field::Journal => record.journal = Some(value),
            Field::Doi => record.doi = Some(value),
        }
    }

    record
}

fn resolve_field(chain: &FieldRules, source: &dyn MetaSource) -> Option<String> {
    match chain.resolve(source) {
        Some((idx, value)) if is_default_rule(&chain.rules[idx]) => {
            tracing::warn!("{}: no page data, using default {:?}", chain.field, value);
            Some(value)
        }
        Some((idx, value)) => {
            tracing::debug!(
                "{}: matched rule {} ({:?})",
                chain.field,
                idx + 1,
                chain.rules[idx]
            );
            Some(value)
        }
        None => {
            tracing::debug!("{}: no rule matched, left empty", chain.field);
            None
        }
    }
}

fn is_default_rule(rule: &Rule) -> bool {
    matches!(rule, Rule::Literal(_) | Rule::CurrentYear)
}

/// Fetches a page and extracts a citation record from it
pub struct MetadataExtractor<F = HttpFetcher> {
    fetcher: F,
}

impl MetadataExtractor<HttpFetcher> {
    /// Extractor backed by a blocking HTTP client
    pub fn http(config: ExtractorConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?))
    }
}

impl<F: PageFetcher> MetadataExtractor<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` once and extract its metadata.
    ///
    /// Only retrieval can fail; see [`crate::FetchError`].
    pub fn extract_from_url(&self, url: &str) -> Result<CitationRecord> {
        let html = self.fetcher.fetch(url)?;
        let record = extract(&html, url);
        tracing::info!("Extracted \"{}\" from {}", record.title, url);
        Ok(record)
    }
}
