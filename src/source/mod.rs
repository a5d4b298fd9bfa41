//! News sources and article extraction
//!
//! Each supported news site implements the [`NewsSource`] trait: it knows
//! how to build listing/search page URLs and how to pull structured article
//! content out of fetched HTML. The crawl engines depend only on the trait,
//! never on a concrete site.

use scraper::{ElementRef, Html, Selector};
use std::fmt;
use url::Url;

mod dantri;
mod vietnamnet;
mod vnexpress;

pub use dantri::DanTri;
pub use vietnamnet::VietNamNet;
pub use vnexpress::VnExpress;

use crate::NewsprintError;

/// A structured article extracted from one page
///
/// Produced once per successful extraction and written straight to disk;
/// the batch does not retain articles in memory.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    /// Summary lines, in page order
    pub description: Vec<String>,
    /// Body lines, in page order
    pub paragraphs: Vec<String>,
    pub source_url: String,
    /// From the page's `og:image` meta tag, when present
    pub image_url: Option<String>,
}

impl fmt::Display for Article {
    /// Renders the canonical article file layout: source URL, blank line,
    /// title, blank line, description lines, blank line, paragraph lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.source_url)?;
        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in &self.description {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        for line in &self.paragraphs {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// A news site the crawl engines can drive
///
/// URL construction and extraction are separated from fetching: the engines
/// own the HTTP client and hand fetched bodies to these methods, which are
/// pure functions of page content plus page-context parameters.
pub trait NewsSource: Send + Sync {
    /// Stable source name, used for registry lookup and logging
    fn name(&self) -> &'static str;

    /// Category slugs in catalog order; drives an "all" category sweep
    fn article_types(&self) -> &'static [&'static str];

    /// URL of one page of a category's listing (pages are 1-based)
    fn listing_page_url(&self, article_type: &str, page: u32) -> String;

    /// URL of one page of search results, or `None` if the site has no
    /// crawlable search
    fn search_page_url(&self, query: &str, page: u32) -> Option<String> {
        let _ = (query, page);
        None
    }

    /// Extracts an article from a fetched page body
    ///
    /// Returns `None` when the expected content anchor (title or body
    /// container) is absent. This is a normal miss, not an error.
    fn extract_article(&self, url: &str, body: &str) -> Option<Article>;

    /// Extracts candidate article URLs from a listing or search page body
    ///
    /// May return an empty list; the discovery engine logs that as a
    /// possible-rate-limiting diagnostic.
    fn extract_listing_urls(&self, body: &str) -> Vec<String>;
}

/// Creates the source registered under `name`
pub fn create_source(name: &str) -> Result<Box<dyn NewsSource>, NewsprintError> {
    match name {
        "vnexpress" => Ok(Box::new(VnExpress)),
        "dantri" => Ok(Box::new(DanTri)),
        "vietnamnet" => Ok(Box::new(VietNamNet)),
        other => Err(NewsprintError::UnknownSource(other.to_string())),
    }
}

/// Collected text of one element, whitespace-trimmed
pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// One text line per child node of `element`
///
/// Mixed-content tags (e.g. a description holding a location stamp element
/// followed by bare text) yield one line per child, so stamps stay on their
/// own line instead of merging into the summary text.
pub(crate) fn child_lines(element: ElementRef) -> Vec<String> {
    element
        .children()
        .filter_map(|node| {
            if let Some(text) = node.value().as_text() {
                Some(text.to_string())
            } else {
                ElementRef::wrap(node).map(|el| el.text().collect::<String>())
            }
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// First text match for a selector, or `None`
pub(crate) fn select_first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(text_of)
        .filter(|s| !s.is_empty())
}

/// First element match for a selector, or `None`
pub(crate) fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// The first anchor href under each element matching `containers`, resolved
/// against `base`
pub(crate) fn anchor_urls(document: &Html, containers: &str, base: &Url) -> Vec<String> {
    let mut urls = Vec::new();

    let Ok(container_selector) = Selector::parse(containers) else {
        return urls;
    };
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return urls;
    };

    for container in document.select(&container_selector) {
        if let Some(anchor) = container.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                if let Ok(resolved) = base.join(href) {
                    urls.push(resolved.to_string());
                }
            }
        }
    }

    urls
}

/// The page's `og:image` URL, when declared
pub(crate) fn og_image(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:image"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
}
