//! Shared test utilities for the folio-render test suite.
//!
//! Provides a fixture project on disk, lookups into a rendered [`Site`] that
//! panic with a clear message on a miss, and small extractors for sitemap XML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_project();
//! let report = generate_on(&project_config(tmp.path()), test_date()).unwrap();
//!
//! let home = site_file(&report.site, "home.html");
//! assert!(home.contains("city nights"));
//! ```

use chrono::NaiveDate;
use std::path::Path;
use tempfile::TempDir;

use crate::config::RenderConfig;
use crate::generate::Site;

// =========================================================================
// Fixture setup
// =========================================================================

/// Fixed sitemap date so rendered output is stable across test runs.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Contents of `fixtures/content.json`.
pub fn fixture_content() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content.json");
    std::fs::read_to_string(path).unwrap()
}

/// A temp project directory holding a copy of the fixture `content.json`.
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("content.json"), fixture_content()).unwrap();
    tmp
}

/// Config pointing at a project made by [`setup_project`], writing to `out/`.
pub fn project_config(root: &Path) -> RenderConfig {
    RenderConfig {
        content_path: root.join("content.json"),
        output_dir: root.join("out"),
        ..RenderConfig::default()
    }
}

// =========================================================================
// Site lookups: panic with a clear message on miss
// =========================================================================

/// All filenames in write order.
pub fn filenames(site: &Site) -> Vec<&str> {
    site.files.iter().map(|f| f.filename.as_str()).collect()
}

/// Contents of a rendered file. Panics if not found.
pub fn site_file<'a>(site: &'a Site, filename: &str) -> &'a str {
    site.file(filename)
        .map(|f| f.contents.as_str())
        .unwrap_or_else(|| {
            let names = filenames(site);
            panic!("file '{filename}' not rendered. Available: {names:?}")
        })
}

// =========================================================================
// Sitemap extractors
// =========================================================================

/// Every `<loc>` value in a sitemap, in document order.
pub fn sitemap_locs(xml: &str) -> Vec<String> {
    xml.split("<loc>")
        .skip(1)
        .filter_map(|rest| rest.split_once("</loc>").map(|(loc, _)| loc.to_string()))
        .collect()
}
