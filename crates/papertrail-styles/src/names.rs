//! Author name rendering and author-list policies

use papertrail_domain::PersonName;

/// How a single "First [Middle] Last" name is rewritten
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameForm {
    /// `Last FM`
    SurnameInitials,
    /// `Last, F. M.`
    SurnameCommaDottedInitials,
    /// `Last, First Middle`
    SurnameCommaGiven,
}

impl NameForm {
    /// Render one name. Names without a surname/given split pass through.
    pub fn render(self, name: &PersonName) -> String {
        let Some(family) = name.family.as_deref() else {
            return name.full.clone();
        };

        match self {
            NameForm::SurnameInitials => format!("{} {}", family, name.initials().concat()),
            NameForm::SurnameCommaDottedInitials => {
                format!("{}, {}.", family, name.initials().join(". "))
            }
            NameForm::SurnameCommaGiven => format!("{}, {}", family, name.given_names()),
        }
    }
}

/// How the rendered names are combined into the author segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorList {
    /// Show at most `max` names; longer lists end in `overflow`,
    /// otherwise the list ends with a period
    Capped {
        max: usize,
        overflow: &'static str,
    },
    /// Serial list with `final_join` before the last name. Lists longer
    /// than `max` are cut to `max` names: the first `max - 1`, then
    /// `ellipsis`, then the last retained name
    Serial {
        max: usize,
        final_join: &'static str,
        ellipsis: &'static str,
    },
    /// Only the first name, closed with a period, or `others` when more
    /// authors follow
    FirstOnly { others: &'static str },
}

impl AuthorList {
    /// Build the author segment; `None` when there are no authors
    pub fn render(self, names: &[PersonName], form: NameForm) -> Option<String> {
        if names.is_empty() {
            return None;
        }

        let segment = match self {
            AuthorList::Capped { max, overflow } => {
                let shown: Vec<String> = names.iter().take(max).map(|n| form.render(n)).collect();
                let joined = shown.join(", ");
                if names.len() > max {
                    format!("{}{}", joined, overflow)
                } else {
                    format!("{}.", joined)
                }
            }
            AuthorList::Serial {
                max,
                final_join,
                ellipsis,
            } => {
                let rendered: Vec<String> = names.iter().map(|n| form.render(n)).collect();
                match rendered.as_slice() {
                    [] => return None,
                    [only] => only.clone(),
                    [head @ .., last] if rendered.len() <= max => {
                        format!("{}{}{}", head.join(", "), final_join, last)
                    }
                    _ => {
                        let head = rendered[..max - 1].join(", ");
                        format!("{}{}{}", head, ellipsis, rendered[max - 1])
                    }
                }
            }
            AuthorList::FirstOnly { others } => {
                let first = format!("{}.", form.render(&names[0]));
                if names.len() > 1 {
                    format!("{}{}", first.trim_end_matches('.'), others)
                } else {
                    first
                }
            }
        };

        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papertrail_domain::parse_author_list;
    use rstest::rstest;

    #[rstest]
    #[case(NameForm::SurnameInitials, "John Ronald Tolkien", "Tolkien JR")]
    #[case(NameForm::SurnameCommaDottedInitials, "John Ronald Tolkien", "Tolkien, J. R.")]
    #[case(NameForm::SurnameCommaGiven, "John Ronald Tolkien", "Tolkien, John Ronald")]
    #[case(NameForm::SurnameInitials, "marie curie", "curie M")]
    #[case(NameForm::SurnameCommaDottedInitials, "Madonna", "Madonna")]
    #[case(NameForm::SurnameCommaGiven, "Plato", "Plato")]
    fn test_name_forms(#[case] form: NameForm, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(form.render(&PersonName::parse(input)), expected);
    }

    fn names(count: usize) -> Vec<PersonName> {
        let field = (1..=count)
            .map(|i| format!("Given{} Family{}", i, i))
            .collect::<Vec<_>>()
            .join(", ");
        parse_author_list(&field)
    }

    #[test]
    fn test_capped_list_overflow() {
        let policy = AuthorList::Capped {
            max: 2,
            overflow: ", et al.",
        };
        assert_eq!(
            policy.render(&names(3), NameForm::SurnameInitials).unwrap(),
            "Family1 G, Family2 G, et al."
        );
        assert_eq!(
            policy.render(&names(2), NameForm::SurnameInitials).unwrap(),
            "Family1 G, Family2 G."
        );
    }

    #[test]
    fn test_serial_list_ellipsis_ends_with_last_retained_author() {
        let policy = AuthorList::Serial {
            max: 3,
            final_join: ", & ",
            ellipsis: ", ... ",
        };
        assert_eq!(
            policy.render(&names(5), NameForm::SurnameCommaDottedInitials).unwrap(),
            "Family1, G., Family2, G., ... Family3, G."
        );
        assert_eq!(
            policy.render(&names(3), NameForm::SurnameCommaDottedInitials).unwrap(),
            "Family1, G., Family2, G., & Family3, G."
        );
    }

    #[test]
    fn test_first_only_with_single_token_name() {
        let policy = AuthorList::FirstOnly { others: ", et al." };
        let plato = parse_author_list("Plato, Aristotle");
        assert_eq!(
            policy.render(&plato, NameForm::SurnameCommaGiven).unwrap(),
            "Plato, et al."
        );
        assert_eq!(
            policy.render(&plato[..1], NameForm::SurnameCommaGiven).unwrap(),
            "Plato."
        );
    }

    #[test]
    fn test_no_authors_renders_nothing() {
        let policy = AuthorList::FirstOnly { others: ", et al." };
        assert_eq!(policy.render(&[], NameForm::SurnameCommaGiven), None);
    }
}
