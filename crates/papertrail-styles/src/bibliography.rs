//! Bibliography rendering
//!
//! Turns an ordered collection of records into a plain-text document:
//! a two-line header naming the style, then one entry per record, each
//! followed by a blank line. Records are numbered in the order given and
//! never re-sorted.

use crate::formatter::StyleFormatter;
use crate::style::CitationStyle;
use papertrail_domain::CitationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of the rule under the header
pub const HEADER_RULE_WIDTH: usize = 80;

/// A rendered bibliography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bibliography {
    /// Style name shown in the header
    pub style: String,
    /// Formatted entries, in record order
    pub entries: Vec<String>,
}

impl Bibliography {
    /// Format every record, assigning 1-based ordinals in input order
    pub fn build(records: &[CitationRecord], style: &dyn StyleFormatter) -> Self {
        tracing::debug!("Rendering {} entries in {} style", records.len(), style.name());
        let entries = records
            .iter()
            .enumerate()
            .map(|(idx, record)| style.format(record, idx + 1))
            .collect();

        Self {
            style: style.name().to_string(),
            entries,
        }
    }

    /// The two header lines
    pub fn header(&self) -> String {
        format!(
            "Bibliography ({} Style)\n{}",
            self.style,
            "=".repeat(HEADER_RULE_WIDTH)
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Bibliography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\n", self.header())?;
        for entry in &self.entries {
            write!(f, "{}\n\n", entry)?;
        }
        Ok(())
    }
}

/// Render records as a bibliography document.
///
/// An empty slice yields the header alone.
pub fn render(records: &[CitationRecord], style: &dyn StyleFormatter) -> String {
    Bibliography::build(records, style).to_string()
}

/// Suggested file name for an exported bibliography
pub fn export_file_name(style: CitationStyle) -> String {
    format!("bibliography_{}.txt", style.name().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_render_is_header_only() {
        let doc = render(&[], &CitationStyle::Apa);
        assert_eq!(doc, format!("Bibliography (APA Style)\n{}\n\n", "=".repeat(80)));
    }

    #[test]
    fn test_ordinals_follow_input_order() {
        let records = vec![
            CitationRecord::default().with_title("Zebra"),
            CitationRecord::default().with_title("Aardvark"),
        ];
        let bib = Bibliography::build(&records, &CitationStyle::Vancouver);
        assert_eq!(bib.entries, vec!["1. Zebra.", "2. Aardvark."]);
        assert_eq!(bib.len(), 2);
    }

    #[test]
    fn test_entries_separated_by_blank_lines() {
        let records = vec![
            CitationRecord::default().with_title("One"),
            CitationRecord::default().with_title("Two"),
        ];
        let doc = render(&records, &CitationStyle::Mla);
        assert!(doc.ends_with("\"One.\"\n\n\"Two.\"\n\n"));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(CitationStyle::Vancouver), "bibliography_vancouver.txt");
        assert_eq!(export_file_name(CitationStyle::Apa), "bibliography_apa.txt");
    }
}
