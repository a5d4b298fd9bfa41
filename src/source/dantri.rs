//! Dan Tri (dantri.com.vn) source
//!
//! Listing hrefs are site-relative and get resolved against the base URL.
//! No crawlable search endpoint.

use scraper::{Html, Selector};
use url::Url;

use super::{
    anchor_urls, child_lines, og_image, select_first, select_first_text, text_of, Article,
    NewsSource,
};

pub struct DanTri;

const BASE_URL: &str = "https://dantri.com.vn";

impl NewsSource for DanTri {
    fn name(&self) -> &'static str {
        "dantri"
    }

    fn article_types(&self) -> &'static [&'static str] {
        &[
            "xa-hoi",
            "the-gioi",
            "kinh-doanh",
            "bat-dong-san",
            "the-thao",
            "lao-dong-viec-lam",
            "tam-long-nhan-ai",
            "suc-khoe",
            "van-hoa",
            "giai-tri",
            "suc-manh-so",
            "giao-duc",
            "an-sinh",
            "phap-luat",
        ]
    }

    fn listing_page_url(&self, article_type: &str, page: u32) -> String {
        format!("{BASE_URL}/{article_type}/trang-{page}.htm")
    }

    fn extract_article(&self, url: &str, body: &str) -> Option<Article> {
        let document = Html::parse_document(body);

        let title = select_first_text(&document, "h1.title-page.detail")?;

        let description = select_first(&document, "h2.singular-sapo")
            .map(child_lines)
            .unwrap_or_default();

        let paragraph_selector = Selector::parse("div.singular-content p").ok()?;
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
        let base = Url::parse(BASE_URL).expect("static base URL");
        anchor_urls(&document, ".article-title", &base)
    }
}
