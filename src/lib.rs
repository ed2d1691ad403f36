//! # folio-render
//!
//! Renders the crawlable side of a single-page portfolio: static HTML pages,
//! a sitemap, and robots.txt, all from one `content.json`.
//!
//! The live site is a JavaScript app that reads `content.json` in the browser.
//! Search engines and link previews get nothing useful from that, so this
//! crate renders one plain page per app view, each of which redirects real
//! browsers back into the app.
//!
//! # Pipeline
//!
//! ```text
//! content.json  →  ContentDocument  →  Site (in memory)  →  output dir
//!                  (content)            (generate, sitemap)   (generate)
//! ```
//!
//! Rendering is pure: [`generate::render_site`] takes the document, the
//! config and a date and returns every file's contents. Only
//! [`generate::write_site`] touches the filesystem, and only the binary reads
//! the environment.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The `content.json` model and loader; keeps gallery order |
//! | [`config`] | `RenderConfig`: paths, base URL precedence, dot-prefix mode, `folio-render.toml` layering |
//! | [`naming`] | Output filename convention (plain vs. dot-prefixed) and slug display titles |
//! | [`generate`] | Maud page templates, site rendering and writing |
//! | [`sitemap`] | Sitemap entries, sitemap XML and robots.txt |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Flag for Both Variants
//!
//! Sites ship in one of two shapes: plain filenames with a separate contact
//! page, or dot-prefixed (hidden) filenames with contact folded into home.
//! Both are driven by [`config::RenderConfig::dot_prefix`] through
//! [`naming::FileNaming`]; there is no second code path.
//!
//! ## Explicit Base URL Precedence
//!
//! An explicit override (`--base-url`, `BASE_URL`, or `base_url` in
//! `folio-render.toml`) wins over the document's `baseUrl`, which wins over the
//! configured fallback. Deploy environments can therefore retarget a site
//! without editing its content.
//!
//! ## Slugs Are Trusted
//!
//! Gallery keys go into filenames and URLs verbatim. They are expected to be
//! filesystem- and URL-safe already; the renderer does not sanitize them.
//! Text content is always HTML-escaped by Maud.

pub mod config;
pub mod content;
pub mod generate;
pub mod naming;
pub mod output;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
