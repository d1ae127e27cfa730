//! Author name representation

use serde::{Deserialize, Serialize};

/// An author name split into given-name parts and a family name.
///
/// Names are read in "First [Middle] Last" order: the last whitespace
/// token is the family name, everything before it is given names. A
/// single-token name has no detectable split and keeps `family` empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub full: String,
    pub given: Vec<String>,
    pub family: Option<String>,
}

impl PersonName {
    /// Parse a full name string
    pub fn parse(input: &str) -> Self {
        let full = input.trim().to_string();
        let mut parts: Vec<String> = full.split_whitespace().map(str::to_string).collect();

        if parts.len() < 2 {
            return Self {
                full,
                given: Vec::new(),
                family: None,
            };
        }

        let family = parts.pop();
        Self {
            full,
            given: parts,
            family,
        }
    }

    /// Whether the name could be split into surname and given names
    pub fn is_split(&self) -> bool {
        self.family.is_some()
    }

    /// Uppercased first character of each given name part
    pub fn initials(&self) -> Vec<String> {
        self.given
            .iter()
            .filter_map(|part| part.chars().next())
            .map(|c| c.to_uppercase().collect::<String>())
            .collect()
    }

    /// Given names joined back with single spaces
    pub fn given_names(&self) -> String {
        self.given.join(" ")
    }
}

/// Parse every author in a comma-separated author field
pub fn parse_author_list(authors: &str) -> Vec<PersonName> {
    authors
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(PersonName::parse)
        .collect()
}
