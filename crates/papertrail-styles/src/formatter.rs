//! Citation formatting
//!
//! Builds one entry from a [`CitationRecord`] by assembling optional
//! segments (authors, year, title, journal block, identifier) and joining
//! the non-empty ones with a single space.

use crate::style::{CitationStyle, Locator, StyleRules, TitleForm, YearPlacement};
use papertrail_domain::{parse_author_list, CitationRecord};

/// Renders one record as one bibliography entry
pub trait StyleFormatter {
    /// Name used in bibliography headers
    fn name(&self) -> &str;

    /// Format `record` as the `ordinal`-th (1-based) entry.
    ///
    /// Never fails; absent fields are left out.
    fn format(&self, record: &CitationRecord, ordinal: usize) -> String;
}

impl StyleFormatter for CitationStyle {
    fn name(&self) -> &str {
        CitationStyle::name(*self)
    }

    fn format(&self, record: &CitationRecord, ordinal: usize) -> String {
        format_citation(self.rules(), record, ordinal)
    }
}

/// Format a record with an explicit rules table
pub fn format_citation(rules: &StyleRules, record: &CitationRecord, ordinal: usize) -> String {
    let authors = parse_author_list(&record.authors);

    let segments = [
        rules.author_list.render(&authors, rules.name_form),
        match rules.year {
            YearPlacement::AfterAuthors => record.year().map(|y| format!("({}).", y)),
            YearPlacement::JournalBlock => None,
        },
        record.title().map(|t| title_segment(rules.title, t)),
        journal_segment(rules, record),
        identifier_segment(rules, record),
    ];

    let body = segments.into_iter().flatten().collect::<Vec<_>>().join(" ");

    if !rules.numbered {
        return body;
    }
    if body.is_empty() {
        format!("{}.", ordinal)
    } else {
        format!("{}. {}", ordinal, body)
    }
}

fn title_segment(form: TitleForm, title: &str) -> String {
    match form {
        TitleForm::Plain => format!("{}.", title),
        TitleForm::Quoted => format!("\"{}.\"", title),
    }
}

fn locator_value(record: &CitationRecord, locator: Locator) -> Option<&str> {
    match locator {
        Locator::Year => record.year(),
        Locator::Volume => record.volume(),
        Locator::Issue => record.issue(),
        Locator::Pages => record.pages(),
    }
}

fn journal_segment(rules: &StyleRules, record: &CitationRecord) -> Option<String> {
    let Some(journal) = record.journal() else {
        // Without a journal only a bare year can stand in for the block
        return match rules.year {
            YearPlacement::JournalBlock => record.year().map(|y| format!("{}.", y)),
            YearPlacement::AfterAuthors => None,
        };
    };

    let mut block = journal.to_string();
    for rule in rules.journal_locators {
        if let Some(value) = locator_value(record, rule.locator) {
            block.push_str(rule.prefix);
            block.push_str(value);
            block.push_str(rule.suffix);
        }
    }
    block.push('.');
    Some(block)
}

fn identifier_segment(rules: &StyleRules, record: &CitationRecord) -> Option<String> {
    let id = &rules.identifier;
    if let Some(doi) = record.doi() {
        Some(format!("{}{}{}", id.doi_prefix, doi, id.suffix))
    } else {
        record
            .url()
            .map(|url| format!("{}{}{}", id.url_prefix, url, id.suffix))
    }
}
