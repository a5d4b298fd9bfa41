//! VietNamNet (vietnamnet.vn) source
//!
//! The article summary appears under one of two sapo classes depending on
//! page template, and the body container is likewise either `maincontent`
//! or `main-content`. Listing titles come in three flavors.

use scraper::{Html, Selector};
use url::Url;

use super::{
    anchor_urls, child_lines, og_image, select_first, select_first_text, text_of, Article,
    NewsSource,
};

pub struct VietNamNet;

const BASE_URL: &str = "https://vietnamnet.vn";

impl NewsSource for VietNamNet {
    fn name(&self) -> &'static str {
        "vietnamnet"
    }

    fn article_types(&self) -> &'static [&'static str] {
        &[
            "thoi-su",
            "kinh-doanh",
            "the-thao",
            "van-hoa",
            "giai-tri",
            "the-gioi",
            "doi-song",
            "giao-duc",
            "suc-khoe",
            "thong-tin-truyen-thong",
            "phap-luat",
            "oto-xe-may",
            "bat-dong-san",
            "du-lich",
        ]
    }

    fn listing_page_url(&self, article_type: &str, page: u32) -> String {
        format!("{BASE_URL}/{article_type}-page{page}")
    }

    fn extract_article(&self, url: &str, body: &str) -> Option<Article> {
        let document = Html::parse_document(body);

        let title = select_first_text(&document, "h1.content-detail-title")?;

        // Both template variants must be present for a well-formed article
        // page; treat a missing sapo or body container as a miss.
        let sapo = select_first(&document, "h2.content-detail-sapo")
            .or_else(|| select_first(&document, "h2.sm-sapo-mb-0"))?;
        let description = child_lines(sapo);

        let content = select_first(&document, "div.maincontent")
            .or_else(|| select_first(&document, "div.main-content"))?;
        let paragraph_selector = Selector::parse("p").ok()?;
        let paragraphs: Vec<String> = content
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
        anchor_urls(
            &document,
            ".horizontalPost__main-title, .vnn-title, .title-bold",
            &base,
        )
    }
}
