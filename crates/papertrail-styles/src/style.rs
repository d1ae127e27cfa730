//! Citation styles and their formatting rules
//!
//! Each supported style is a row in a small rules table. The assembly
//! code in [`crate::formatter`] is shared; only punctuation, ordering and
//! author policies differ between rows.

use crate::names::{AuthorList, NameForm};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Requested style name is not supported
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown citation style: {0} (expected Vancouver, APA, or MLA)")]
pub struct UnknownStyle(pub String);

/// Supported citation styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    #[default]
    Vancouver,
    Apa,
    Mla,
}

impl CitationStyle {
    /// Display name, e.g. for bibliography headers
    pub fn name(self) -> &'static str {
        match self {
            CitationStyle::Vancouver => "Vancouver",
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
        }
    }

    pub fn all() -> [CitationStyle; 3] {
        [CitationStyle::Vancouver, CitationStyle::Apa, CitationStyle::Mla]
    }

    /// The formatting rules for this style
    pub fn rules(self) -> &'static StyleRules {
        match self {
            CitationStyle::Vancouver => &VANCOUVER,
            CitationStyle::Apa => &APA,
            CitationStyle::Mla => &MLA,
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CitationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vancouver" => Ok(CitationStyle::Vancouver),
            "apa" => Ok(CitationStyle::Apa),
            "mla" => Ok(CitationStyle::Mla),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// Where the year is printed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YearPlacement {
    /// Its own `(<year>).` segment right after the authors
    AfterAuthors,
    /// Inside the journal block (or alone when there is no journal)
    JournalBlock,
}

/// How the title segment is wrapped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleForm {
    /// `Title.`
    Plain,
    /// `"Title."`
    Quoted,
}

/// Record fields that can follow the journal name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    Year,
    Volume,
    Issue,
    Pages,
}

/// One optional part of the journal block with its punctuation.
/// Both `prefix` and `suffix` are emitted only when the value is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatorRule {
    pub locator: Locator,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

const fn locator(locator: Locator, prefix: &'static str, suffix: &'static str) -> LocatorRule {
    LocatorRule {
        locator,
        prefix,
        suffix,
    }
}

/// The identifier segment: DOI first, URL otherwise
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentifierRule {
    pub doi_prefix: &'static str,
    pub url_prefix: &'static str,
    pub suffix: &'static str,
}

/// Everything that distinguishes one style from another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRules {
    /// Prefix entries with `"<ordinal>. "`
    pub numbered: bool,
    pub name_form: NameForm,
    pub author_list: AuthorList,
    pub year: YearPlacement,
    pub title: TitleForm,
    /// Parts appended to the journal name, in order
    pub journal_locators: &'static [LocatorRule],
    pub identifier: IdentifierRule,
}

pub static VANCOUVER: StyleRules = StyleRules {
    numbered: true,
    name_form: NameForm::SurnameInitials,
    author_list: AuthorList::Capped {
        max: 6,
        overflow: ", et al.",
    },
    year: YearPlacement::JournalBlock,
    title: TitleForm::Plain,
    journal_locators: &[
        locator(Locator::Year, " ", ""),
        locator(Locator::Volume, ";", ""),
        locator(Locator::Issue, "(", ")"),
        locator(Locator::Pages, ":", ""),
    ],
    identifier: IdentifierRule {
        doi_prefix: "doi:",
        url_prefix: "Available from: ",
        suffix: "",
    },
};

pub static APA: StyleRules = StyleRules {
    numbered: false,
    name_form: NameForm::SurnameCommaDottedInitials,
    author_list: AuthorList::Serial {
        max: 20,
        final_join: ", & ",
        ellipsis: ", ... ",
    },
    year: YearPlacement::AfterAuthors,
    title: TitleForm::Plain,
    journal_locators: &[
        locator(Locator::Volume, ", ", ""),
        locator(Locator::Issue, "(", ")"),
        locator(Locator::Pages, ", ", ""),
    ],
    identifier: IdentifierRule {
        doi_prefix: "https://doi.org/",
        url_prefix: "",
        suffix: "",
    },
};

pub static MLA: StyleRules = StyleRules {
    numbered: false,
    name_form: NameForm::SurnameCommaGiven,
    author_list: AuthorList::FirstOnly { others: ", et al." },
    year: YearPlacement::JournalBlock,
    title: TitleForm::Quoted,
    journal_locators: &[
        locator(Locator::Volume, ", vol. ", ""),
        locator(Locator::Issue, ", no. ", ""),
        locator(Locator::Year, ", ", ""),
        locator(Locator::Pages, ", pp. ", ""),
    ],
    identifier: IdentifierRule {
        doi_prefix: "doi:",
        url_prefix: "",
        suffix: ".",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Vancouver", CitationStyle::Vancouver)]
    #[case("apa", CitationStyle::Apa)]
    #[case(" MLA ", CitationStyle::Mla)]
    fn test_parse_style(#[case] input: &str, #[case] expected: CitationStyle) {
        assert_eq!(input.parse::<CitationStyle>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_style() {
        let err = "chicago".parse::<CitationStyle>().unwrap_err();
        assert_eq!(err, UnknownStyle("chicago".to_string()));
    }

    #[test]
    fn test_names_round_trip_through_parse() {
        for style in CitationStyle::all() {
            assert_eq!(style.name().parse::<CitationStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&CitationStyle::Apa).unwrap(), "\"apa\"");
        let style: CitationStyle = serde_json::from_str("\"mla\"").unwrap();
        assert_eq!(style, CitationStyle::Mla);
    }

    #[test]
    fn test_only_vancouver_is_numbered() {
        let numbered: Vec<_> = CitationStyle::all()
            .into_iter()
            .filter(|s| s.rules().numbered)
            .collect();
        assert_eq!(numbered, vec![CitationStyle::Vancouver]);
    }
}
