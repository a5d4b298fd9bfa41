//! Shared test fixtures: a mock news source pointed at a wiremock server

use newsprint::config::{Config, CrawlConfig, OutputConfig, TaskKind, UserAgentConfig};
use newsprint::source::{Article, NewsSource};
use scraper::{Html, Selector};
use std::path::Path;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A minimal news source whose pages live on a local mock server
///
/// Listing pages are `<base>/<slug>/page-<n>`, search pages are
/// `<base>/search?q=<query>&page=<n>`, and articles use `h1.headline`,
/// `p.summary` and `p.story-body`.
pub struct TestWire {
    base: Url,
}

impl TestWire {
    pub fn new(base: &str) -> Self {
        Self {
            base: Url::parse(base).expect("valid test base URL"),
        }
    }
}

impl NewsSource for TestWire {
    fn name(&self) -> &'static str {
        "testwire"
    }

    fn article_types(&self) -> &'static [&'static str] {
        &["alpha", "beta", "gamma"]
    }

    fn listing_page_url(&self, article_type: &str, page: u32) -> String {
        format!("{}{}/page-{}", self.base, article_type, page)
    }

    fn search_page_url(&self, query: &str, page: u32) -> Option<String> {
        Some(format!(
            "{}search?q={}&page={}",
            self.base,
            urlencoding::encode(query),
            page
        ))
    }

    fn extract_article(&self, url: &str, body: &str) -> Option<Article> {
        let document = Html::parse_document(body);

        let headline = Selector::parse("h1.headline").unwrap();
        let summary = Selector::parse("p.summary").unwrap();
        let story_body = Selector::parse("p.story-body").unwrap();

        let title = document
            .select(&headline)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())?;

        let description = document
            .select(&summary)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();
        let paragraphs = document
            .select(&story_body)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        Some(Article {
            title,
            description,
            paragraphs,
            source_url: url.to_string(),
            image_url: None,
        })
    }

    fn extract_listing_urls(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);
        let selector = Selector::parse(".story a[href]").unwrap();

        document
            .select(&selector)
            .filter_map(|el| el.value().attr("href"))
            .filter_map(|href| self.base.join(href).ok())
            .map(|url| url.to_string())
            .collect()
    }
}

/// A source with no search endpoint, for startup-rejection tests
pub struct NoSearchWire;

impl NewsSource for NoSearchWire {
    fn name(&self) -> &'static str {
        "nosearchwire"
    }

    fn article_types(&self) -> &'static [&'static str] {
        &["alpha"]
    }

    fn listing_page_url(&self, article_type: &str, page: u32) -> String {
        format!("http://127.0.0.1:1/{article_type}/page-{page}")
    }

    fn extract_article(&self, _url: &str, _body: &str) -> Option<Article> {
        None
    }

    fn extract_listing_urls(&self, _body: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Builds a run config against `root` with the given task
pub fn test_config(task: TaskKind, root: &Path) -> Config {
    Config {
        crawl: CrawlConfig {
            source: "testwire".to_string(),
            task,
            num_workers: 4,
            total_pages: 2,
            urls_file: None,
            article_type: None,
            search_query: None,
        },
        output: OutputConfig {
            root: root.to_path_buf(),
        },
        user_agent: UserAgentConfig::default(),
    }
}

/// Article page HTML in the TestWire format
pub fn article_html(title: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="headline">{title}</h1>
        <p class="summary">Summary of {title}</p>
        <p class="story-body">Body of {title}</p>
        </body></html>"#
    )
}

/// Listing page HTML linking to the given hrefs
pub fn listing_html(hrefs: &[&str]) -> String {
    let stories: String = hrefs
        .iter()
        .map(|href| format!(r#"<div class="story"><a href="{href}">story</a></div>"#))
        .collect();
    format!("<html><body>{stories}</body></html>")
}

/// Mounts an article page at `route` on the mock server
pub async fn mount_article(server: &MockServer, route: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_html(title)))
        .mount(server)
        .await;
}

/// Mounts a listing page at `route` linking to `hrefs`
pub async fn mount_listing(server: &MockServer, route: &str, hrefs: &[&str]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(hrefs)))
        .mount(server)
        .await;
}

/// Names of the plain files directly under `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("output dir exists")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
