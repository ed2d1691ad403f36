//! Page rendering and file emission.
//!
//! Takes a parsed [`ContentDocument`] and a [`RenderConfig`] and produces the
//! crawlable counterpart of the portfolio's single-page app: one static page
//! per view, a sitemap, and robots.txt.
//!
//! ## Generated Files
//!
//! - **Home** (`home.html`): hero text and a link to every gallery
//! - **Gallery pages** (`gallery-{slug}.html`): description, tags and images
//! - **Contact** (`contact.html`): only when the document has a contact and
//!   dot-prefix mode is off; in dot-prefix mode the contact section is
//!   appended to the home page instead
//! - **Sitemap** (`sitemap.xml`) and **robots.txt**
//!
//! Files are written in that order, galleries in document order.
//!
//! ## Redirect
//!
//! Each page carries a small inline script that sends browsers to the live app
//! at `./#{view}` (`home`, `gallery/{slug}`, `contact`). Crawlers and `file:`
//! previews see the static markup.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated content text is escaped.

use crate::config::RenderConfig;
use crate::content::{self, Contact, ContentDocument, ContentError, Gallery};
use crate::naming::{FileNaming, display_title};
use crate::sitemap;
use chrono::{Local, NaiveDate};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a generated file is, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Home,
    Gallery,
    Contact,
    Sitemap,
    Robots,
}

impl FileKind {
    /// Pages are the files listed in the sitemap.
    pub fn is_page(self) -> bool {
        matches!(self, FileKind::Home | FileKind::Gallery | FileKind::Contact)
    }
}

/// A fully rendered output file, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub kind: FileKind,
    /// Display label: the gallery slug for gallery pages, else the kind.
    pub label: String,
    pub filename: String,
    pub contents: String,
}

/// Everything one run produces, in write order.
#[derive(Debug, Clone)]
pub struct Site {
    pub base_url: String,
    pub files: Vec<RenderedFile>,
}

impl Site {
    pub fn file(&self, filename: &str) -> Option<&RenderedFile> {
        self.files.iter().find(|f| f.filename == filename)
    }

    pub fn count(&self, kind: FileKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub site: Site,
}

/// Load the content document, render the site, and write it out, stamping
/// the sitemap with today's local date.
pub fn generate(config: &RenderConfig) -> Result<GenerateReport, GenerateError> {
    generate_on(config, Local::now().date_naive())
}

/// [`generate`] with an explicit sitemap date.
pub fn generate_on(config: &RenderConfig, date: NaiveDate) -> Result<GenerateReport, GenerateError> {
    let doc = content::load_content(&config.content_path)?;
    let site = render_site(&doc, config, date);
    write_site(&site, &config.output_dir)?;
    Ok(GenerateReport {
        output_dir: config.output_dir.clone(),
        site,
    })
}

/// Render every output file in memory. Pure: no I/O.
pub fn render_site(doc: &ContentDocument, config: &RenderConfig, date: NaiveDate) -> Site {
    let naming = FileNaming::new(config.dot_prefix);
    let base_url = config.resolve_base_url(doc);
    let page_name = config.page_name(doc);
    let mut files = Vec::new();

    // Contact is embedded in home in dot-prefix mode, its own page otherwise.
    let contact_file = naming.contact();
    let embedded_contact = doc.contact.as_ref().filter(|_| contact_file.is_none());

    files.push(RenderedFile {
        kind: FileKind::Home,
        label: "Home".to_string(),
        filename: naming.home(),
        contents: render_home(doc, page_name, &naming, embedded_contact).into_string(),
    });

    for (slug, gallery) in doc.galleries.iter() {
        files.push(RenderedFile {
            kind: FileKind::Gallery,
            label: slug.to_string(),
            filename: naming.gallery(slug),
            contents: render_gallery_page(slug, gallery, page_name).into_string(),
        });
    }

    if let (Some(filename), Some(contact)) = (contact_file, &doc.contact) {
        files.push(RenderedFile {
            kind: FileKind::Contact,
            label: "Contact".to_string(),
            filename,
            contents: render_contact_page(contact, page_name).into_string(),
        });
    }

    let pages: Vec<String> = files
        .iter()
        .filter(|f| f.kind.is_page())
        .map(|f| f.filename.clone())
        .collect();
    let entries = sitemap::sitemap_entries(&base_url, &pages, date);
    let sitemap_filename = naming.sitemap();

    let robots = sitemap::render_robots(&base_url, &sitemap_filename);

    files.push(RenderedFile {
        kind: FileKind::Sitemap,
        label: "Sitemap".to_string(),
        filename: sitemap_filename,
        contents: sitemap::render_sitemap(&entries).into_string(),
    });
    files.push(RenderedFile {
        kind: FileKind::Robots,
        label: "Robots".to_string(),
        filename: naming.robots(),
        contents: robots,
    });

    Site { base_url, files }
}

/// Write every file into `output_dir`, creating it if needed. Each file is
/// overwritten. Stops at the first failure; earlier files stay on disk.
pub fn write_site(site: &Site, output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;
    for file in &site.files {
        let path = output_dir.join(&file.filename);
        fs::write(&path, &file.contents).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        crate::output::print_written(file);
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure shared by every page.
fn base_document(title: &str, page_name: &str, redirect_view: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                meta name="description" content={ "Portfolio content: " (title) };
                script { (redirect_script(redirect_view)) }
                noscript {
                    style { "body { visibility: visible; }" }
                }
            }
            body {
                main {
                    h1 { (page_name) }
                    (content)
                }
            }
        }
    }
}

/// Inline script sending browsers to the app view `./#{view}`.
///
/// The target is emitted as a JSON string literal with `</` and `<!--` broken
/// up, so a slug cannot close the script element, push the HTML parser into
/// its escaped-script state, or end the string.
fn redirect_script(view: &str) -> PreEscaped<String> {
    let target = serde_json::to_string(&format!("./#{view}"))
        .unwrap_or_else(|_| "\"./\"".to_string())
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--");
    PreEscaped(format!(
        "if (window.location.protocol !== 'file:') {{ window.location.replace({target}); }}"
    ))
}

/// Renders the contact block used by the contact page and embedded home.
fn contact_section(contact: &Contact) -> Markup {
    html! {
        section {
            h2 { "Contact" }
            p { (contact.name) }
            p { a href={ "mailto:" (contact.email) } { (contact.email) } }
            @if let Some(phone) = contact.phone() {
                p { a href={ "tel:" (phone) } { (phone) } }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: hero, gallery links, and optionally contact.
fn render_home(
    doc: &ContentDocument,
    page_name: &str,
    naming: &FileNaming,
    embedded_contact: Option<&Contact>,
) -> Markup {
    let content = html! {
        @if let Some(hero) = &doc.hero {
            section {
                h2 { (hero.title) }
                p { (hero.subtitle) }
            }
        }
        section {
            h2 { "Galleries" }
            ul {
                @for (slug, _) in doc.galleries.iter() {
                    li { a href={ "./" (naming.gallery(slug)) } { (display_title(slug)) } }
                }
            }
        }
        @if let Some(contact) = embedded_contact {
            (contact_section(contact))
        }
    };

    base_document(page_name, page_name, "home", content)
}

/// Renders one gallery page: description, tags, images.
fn render_gallery_page(slug: &str, gallery: &Gallery, page_name: &str) -> Markup {
    let title = format!("{slug} - {page_name}");
    let alt = format!("{slug} image");

    let content = html! {
        article {
            h2 { (display_title(slug)) }
            p { (gallery.description) }
            ul {
                @for tag in &gallery.tags {
                    li { (tag) }
                }
            }
            div {
                @for image in &gallery.images {
                    img src=(image) alt=(alt) style="max-width:100%;";
                    br;
                }
            }
        }
    };

    base_document(&title, page_name, &format!("gallery/{slug}"), content)
}

/// Renders the standalone contact page.
fn render_contact_page(contact: &Contact, page_name: &str) -> Markup {
    let title = format!("Contact - {page_name}");
    base_document(&title, page_name, "contact", contact_section(contact))
}

// ============================================================================
// Tests
// ============================================================================
