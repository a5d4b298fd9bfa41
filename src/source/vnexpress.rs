//! VnExpress (vnexpress.net) source
//!
//! Listing pages are `https://vnexpress.net/<slug>-p<page>`; search goes
//! through the dedicated `timkiem.vnexpress.net` endpoint. Articles carry
//! their title in `h1.title-detail`, the summary in `p.description`, and
//! body text in `p.Normal` tags.

use scraper::{Html, Selector};
use url::Url;

use super::{
    anchor_urls, child_lines, og_image, select_first, select_first_text, text_of, Article,
    NewsSource,
};

pub struct VnExpress;

impl NewsSource for VnExpress {
    fn name(&self) -> &'static str {
        "vnexpress"
    }

    fn article_types(&self) -> &'static [&'static str] {
        &[
            "thoi-su",
            "du-lich",
            "the-gioi",
            "kinh-doanh",
            "khoa-hoc",
            "giai-tri",
            "the-thao",
            "phap-luat",
            "giao-duc",
            "suc-khoe",
            "doi-song",
        ]
    }

    fn listing_page_url(&self, article_type: &str, page: u32) -> String {
        format!("https://vnexpress.net/{article_type}-p{page}")
    }

    fn search_page_url(&self, query: &str, page: u32) -> Option<String> {
        let query = urlencoding::encode(query);
        Some(format!(
            "https://timkiem.vnexpress.net/?q={query}&media_type=text&fromdate=0&todate=0&latest=on&cate_code=&search_f=title,tag_list&date_format=all&page={page}"
        ))
    }

    fn extract_article(&self, url: &str, body: &str) -> Option<Article> {
        let document = Html::parse_document(body);

        let title = select_first_text(&document, "h1.title-detail")?;

        // Sport articles nest a location stamp inside the description tag;
        // child_lines keeps it as its own line.
        let description = select_first(&document, "p.description")
            .map(child_lines)
            .unwrap_or_default();

        let paragraph_selector = Selector::parse("p.Normal").ok()?;
        let paragraphs: Vec<String> = document
            .select(&paragraph_selector)
            .map(text_of)
            .filter(|p| !p.is_empty())
            .collect();

        Some(Article {
            title,
            description,
            paragraphs,
            source_url: url.to_string(),
            image_url: og_image(&document),
        })
    }

    fn extract_listing_urls(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);
        let base = Url::parse("https://vnexpress.net").expect("static base URL");
        anchor_urls(&document, ".title-news", &base)
    }
}
