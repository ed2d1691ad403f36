//! Sitemap and robots.txt rendering.
//!
//! The sitemap lists the site root at priority `1.0` followed by every page
//! written in this run at `0.8`, all stamped with the same `lastmod` date.
//! Locations are `{base}/{filename}`, so the sitemap always agrees with what
//! is actually on disk, including dot-prefixed names.

use chrono::NaiveDate;
use maud::{Markup, PreEscaped, html};

const ROOT_PRIORITY: f32 = 1.0;
const PAGE_PRIORITY: f32 = 0.8;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub priority: f32,
}

/// Root entry plus one entry per page filename, in the order given.
///
/// `base_url` must not end with `/`.
pub fn sitemap_entries(base_url: &str, pages: &[String], date: NaiveDate) -> Vec<SitemapEntry> {
    let root = SitemapEntry {
        url: format!("{base_url}/"),
        last_modified: date,
        priority: ROOT_PRIORITY,
    };
    std::iter::once(root)
        .chain(pages.iter().map(|page| SitemapEntry {
            url: format!("{base_url}/{page}"),
            last_modified: date,
            priority: PAGE_PRIORITY,
        }))
        .collect()
}

/// Render the sitemap XML document. Text is escaped by maud.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Markup {
    html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        "\n"
        urlset xmlns=(SITEMAP_NS) {
            @for entry in entries {
                url {
                    loc { (entry.url) }
                    lastmod { (entry.last_modified.format("%Y-%m-%d").to_string()) }
                    priority { (format!("{:.1}", entry.priority)) }
                }
            }
        }
    }
}

/// Render robots.txt: allow everything, point at the sitemap.
pub fn render_robots(base_url: &str, sitemap_filename: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {base_url}/{sitemap_filename}\n")
}
