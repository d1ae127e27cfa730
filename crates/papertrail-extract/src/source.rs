//! Lookups that extraction rules run against
//!
//! Rules never touch an HTML parser directly; they ask a [`MetaSource`]
//! for meta tag values, the `<title>` text, or the raw page text. The
//! production source is [`HtmlDocument`], backed by `scraper`.

use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref META_SELECTOR: Selector = Selector::parse("meta").unwrap();
    static ref TITLE_SELECTOR: Selector = Selector::parse("title").unwrap();
}

/// Read-only view of a page for extraction rules
pub trait MetaSource {
    /// `content` of the first `<meta property="...">` with this property
    fn meta_property(&self, property: &str) -> Option<String>;

    /// `content` of the first `<meta name="...">` with this name
    fn meta_name(&self, name: &str) -> Option<String>;

    /// `content` of every `<meta name="...">` with this name, in document order
    fn meta_name_all(&self, name: &str) -> Vec<String>;

    /// Text of the first `<title>` element
    fn title_text(&self) -> Option<String>;

    /// The raw page source
    fn page_text(&self) -> &str;
}

/// A parsed HTML page
pub struct HtmlDocument<'a> {
    raw: &'a str,
    document: Html,
}

impl<'a> HtmlDocument<'a> {
    /// Parse a page. Malformed markup is recovered, never rejected.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            document: Html::parse_document(raw),
        }
    }

    /// First meta tag whose `attr` equals `value`, returning its content
    fn first_meta(&self, attr: &str, value: &str) -> Option<String> {
        self.document
            .select(&META_SELECTOR)
            .find(|el| el.value().attr(attr) == Some(value))
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    }
}

impl MetaSource for HtmlDocument<'_> {
    fn meta_property(&self, property: &str) -> Option<String> {
        self.first_meta("property", property)
    }

    fn meta_name(&self, name: &str) -> Option<String> {
        self.first_meta("name", name)
    }

    fn meta_name_all(&self, name: &str) -> Vec<String> {
        self.document
            .select(&META_SELECTOR)
            .filter(|el| el.value().attr("name") == Some(name))
            .filter_map(|el| el.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn title_text(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    fn page_text(&self) -> &str {
        self.raw
    }
}
