//! Declarative fallback chains for each extracted field
//!
//! Every field owns an ordered list of [`Rule`]s. Rules run in order
//! against a [`MetaSource`] and the first one producing a non-empty
//! value wins.

use crate::source::MetaSource;
use chrono::Datelike;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // Year inside a date meta value, e.g. "2019/03/01" or "March 2019"
    static ref YEAR_IN_DATE: Regex = Regex::new(r"20\d{2}|19\d{2}").unwrap();

    // Standalone year anywhere in the page
    static ref YEAR_IN_PAGE: Regex = Regex::new(r"\b(20\d{2}|19\d{2})\b").unwrap();

    // Greedy on purpose: trailing punctuation or markup is kept
    static ref DOI_IN_PAGE: Regex = Regex::new(r"10\.\d{4,}/\S+").unwrap();
}

/// Fields populated by extraction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Authors,
    Year,
    Journal,
    Doi,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Authors => "authors",
            Field::Year => "year",
            Field::Journal => "journal",
            Field::Doi => "doi",
        };
        f.write_str(name)
    }
}

/// Regex scans used by rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    YearInDate,
    YearInPage,
    Doi,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::YearInDate => &YEAR_IN_DATE,
            Pattern::YearInPage => &YEAR_IN_PAGE,
            Pattern::Doi => &DOI_IN_PAGE,
        }
    }

    /// First match in scan order
    pub fn first_match(self, text: &str) -> Option<String> {
        self.regex().find(text).map(|m| m.as_str().to_string())
    }
}

/// One step of a fallback chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// `<meta property="...">` content
    MetaProperty(&'static str),
    /// `<meta name="...">` content
    MetaName(&'static str),
    /// Every `<meta name="...">` content, joined with the separator
    MetaNameAll {
        name: &'static str,
        separator: &'static str,
    },
    /// `<title>` text, trimmed
    TitleTag,
    /// First pattern match inside a `<meta name="...">` value
    MetaNamePattern {
        name: &'static str,
        pattern: Pattern,
    },
    /// First pattern match in the raw page text
    PagePattern(Pattern),
    /// The current calendar year
    CurrentYear,
    /// A fixed value
    Literal(&'static str),
}

impl Rule {
    /// Run the rule; `None` and empty strings both mean "no match"
    pub fn apply(&self, source: &dyn MetaSource) -> Option<String> {
        let value = match *self {
            Rule::MetaProperty(property) => source.meta_property(property),
            Rule::MetaName(name) => source.meta_name(name),
            Rule::MetaNameAll { name, separator } => {
                let values = source.meta_name_all(name);
                Some(values.join(separator))
            }
            Rule::TitleTag => source.title_text().map(|t| t.trim().to_string()),
            Rule::MetaNamePattern { name, pattern } => source
                .meta_name(name)
                .and_then(|value| pattern.first_match(&value)),
            Rule::PagePattern(pattern) => pattern.first_match(source.page_text()),
            Rule::CurrentYear => Some(chrono::Local::now().year().to_string()),
            Rule::Literal(value) => Some(value.to_string()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// The ordered rules for one field
#[derive(Clone, Copy, Debug)]
pub struct FieldRules {
    pub field: Field,
    pub rules: &'static [Rule],
}

impl FieldRules {
    /// Run the chain, returning the winning value and the index of the
    /// rule that produced it
    pub fn resolve(&self, source: &dyn MetaSource) -> Option<(usize, String)> {
        self.rules
            .iter()
            .enumerate()
            .find_map(|(idx, rule)| rule.apply(source).map(|value| (idx, value)))
    }
}

pub const TITLE_RULES: FieldRules = FieldRules {
    field: Field::Title,
    rules: &[
        Rule::MetaProperty("og:title"),
        Rule::MetaName("citation_title"),
        Rule::TitleTag,
        Rule::Literal("Unknown Title"),
    ],
};

pub const AUTHOR_RULES: FieldRules = FieldRules {
    field: Field::Authors,
    rules: &[
        Rule::MetaNameAll {
            name: "citation_author",
            separator: ", ",
        },
        Rule::MetaName("author"),
    ],
};

pub const YEAR_RULES: FieldRules = FieldRules {
    field: Field::Year,
    rules: &[
        Rule::MetaNamePattern {
            name: "citation_publication_date",
            pattern: Pattern::YearInDate,
        },
        Rule::PagePattern(Pattern::YearInPage),
        Rule::CurrentYear,
    ],
};

pub const JOURNAL_RULES: FieldRules = FieldRules {
    field: Field::Journal,
    rules: &[Rule::MetaName("citation_journal_title")],
};

pub const DOI_RULES: FieldRules = FieldRules {
    field: Field::Doi,
    rules: &[
        Rule::MetaName("citation_doi"),
        Rule::PagePattern(Pattern::Doi),
    ],
};

/// Every field chain, in extraction order
pub const ALL_FIELD_RULES: [FieldRules; 5] =
    [TITLE_RULES, AUTHOR_RULES, YEAR_RULES, JOURNAL_RULES, DOI_RULES];
