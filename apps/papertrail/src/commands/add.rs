//! `add-url` and `add`

use std::io::Write;

use anyhow::{bail, Context, Result};
use papertrail_domain::{
    has_blocking_errors, validate_manual_entry, CitationRecord, ValidationSeverity,
};
use papertrail_extract::{MetadataExtractor, PageFetcher};

use super::Session;

/// Fetch `url`, extract its metadata and save the record
pub fn add_url<F: PageFetcher>(
    session: &Session,
    extractor: &MetadataExtractor<F>,
    url: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let record = extractor
        .extract_from_url(url)
        .with_context(|| format!("Failed to fetch metadata from {}", url))?;

    let id = session.store.create(&record)?;
    writeln!(out, "Added citation {}: {}", id, record.title)?;
    Ok(())
}

/// Validate and save a manual entry
pub fn add_manual(session: &Session, record: CitationRecord, out: &mut dyn Write) -> Result<()> {
    let problems = validate_manual_entry(&record);
    if has_blocking_errors(&problems) {
        let messages: Vec<_> = problems
            .iter()
            .filter(|p| p.severity == ValidationSeverity::Error)
            .map(|p| p.message.as_str())
            .collect();
        bail!("{}", messages.join("; "));
    }

    for warning in &problems {
        writeln!(out, "Warning: {}", warning.message)?;
    }

    let id = session.store.create(&record)?;
    writeln!(out, "Added citation {}: {}", id, record.title)?;
    Ok(())
}
