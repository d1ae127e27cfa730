//! Citation record domain model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a citation record came from
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    /// Scraped from a web page
    #[default]
    Website,
    /// Typed in by the user
    Manual,
    /// Any other tag, kept verbatim
    Other(String),
}

impl SourceType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Website => "website",
            SourceType::Manual => "manual",
            SourceType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SourceType {
    fn from(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "website" => SourceType::Website,
            "manual" => SourceType::Manual,
            _ => SourceType::Other(tag.trim().to_string()),
        }
    }
}

impl From<String> for SourceType {
    fn from(tag: String) -> Self {
        SourceType::from(tag.as_str())
    }
}

impl From<SourceType> for String {
    fn from(source_type: SourceType) -> Self {
        source_type.as_str().to_string()
    }
}

impl FromStr for SourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SourceType::from(s))
    }
}

/// A single bibliographic record.
///
/// `authors` holds a comma-separated list of full names in
/// "First [Middle] Last" order; see [`CitationRecord::author_list`].
/// Empty strings in optional fields are treated the same as `None`
/// by every accessor below.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationRecord {
    /// Assigned by the store
    pub id: Option<i64>,
    pub title: String,
    pub authors: String,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    pub source_type: SourceType,
    /// Creation timestamp, assigned by the store
    pub date_added: Option<String>,
}

impl CitationRecord {
    /// Create an empty record for a scraped web page
    pub fn website(url: impl Into<String>) -> Self {
        Self {
            url: non_empty(url.into()),
            source_type: SourceType::Website,
            ..Self::default()
        }
    }

    /// Create a record from the five manual-entry fields.
    ///
    /// Inputs are trimmed; blank values become `None`.
    pub fn manual(title: &str, authors: &str, year: &str, journal: &str, doi: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            authors: authors.trim().to_string(),
            year: non_empty(year.trim().to_string()),
            journal: non_empty(journal.trim().to_string()),
            doi: non_empty(doi.trim().to_string()),
            source_type: SourceType::Manual,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = non_empty(year.into());
        self
    }

    pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
        self.journal = non_empty(journal.into());
        self
    }

    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = non_empty(volume.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issue = non_empty(issue.into());
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = non_empty(pages.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = non_empty(doi.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    /// Builder used by the store when materializing rows
    pub fn with_identity(mut self, id: i64, date_added: Option<String>) -> Self {
        self.id = Some(id);
        self.date_added = date_added;
        self
    }

    /// The ordered author list.
    ///
    /// Splits on `,`, trims each element and drops empty ones.
    pub fn author_list(&self) -> Vec<&str> {
        self.authors
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }

    pub fn title(&self) -> Option<&str> {
        present(Some(&self.title))
    }

    pub fn year(&self) -> Option<&str> {
        present(self.year.as_ref())
    }

    pub fn journal(&self) -> Option<&str> {
        present(self.journal.as_ref())
    }

    pub fn volume(&self) -> Option<&str> {
        present(self.volume.as_ref())
    }

    pub fn issue(&self) -> Option<&str> {
        present(self.issue.as_ref())
    }

    pub fn pages(&self) -> Option<&str> {
        present(self.pages.as_ref())
    }

    pub fn doi(&self) -> Option<&str> {
        present(self.doi.as_ref())
    }

    pub fn url(&self) -> Option<&str> {
        present(self.url.as_ref())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_record() {
        let record = CitationRecord::manual(
            "  Deep Learning ",
            "Yann LeCun, Yoshua Bengio",
            "2015",
            "",
            " 10.1038/nature14539",
        );
        assert_eq!(record.title, "Deep Learning");
        assert_eq!(record.year(), Some("2015"));
        assert_eq!(record.journal, None);
        assert_eq!(record.doi(), Some("10.1038/nature14539"));
        assert_eq!(record.source_type, SourceType::Manual);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_author_list_drops_blanks() {
        let record = CitationRecord::default().with_authors("Ada Lovelace, , Charles Babbage,");
        assert_eq!(record.author_list(), vec!["Ada Lovelace", "Charles Babbage"]);
    }

    #[test]
    fn test_blank_fields_read_as_absent() {
        let mut record = CitationRecord::website("https://example.org");
        record.journal = Some("   ".to_string());
        assert_eq!(record.journal(), None);
        assert_eq!(record.title(), None);
        assert_eq!(record.url(), Some("https://example.org"));
    }

    #[test]
    fn test_source_type_round_trip() {
        assert_eq!(SourceType::from("website"), SourceType::Website);
        assert_eq!(SourceType::from("Manual"), SourceType::Manual);
        assert_eq!(
            SourceType::from("pdf"),
            SourceType::Other("pdf".to_string())
        );
        assert_eq!(SourceType::Other("pdf".to_string()).to_string(), "pdf");
    }

    #[test]
    fn test_source_type_serializes_lowercase() {
        let record = CitationRecord::manual("T", "", "", "", "");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source_type"], "manual");
    }
}
