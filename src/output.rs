//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what an entity *is* (a gallery's position and title) and
//! shows filenames as secondary context after `→`. Every entity follows the
//! same two-level pattern: a header line, then indented context lines.
//!
//! # Output Format
//!
//! ## Per-file progress
//!
//! One line per file, printed as soon as the file is on disk:
//!
//! ```text
//! Generated home.html
//! Generated gallery-travel.html
//! ```
//!
//! ## Build summary
//!
//! ```text
//! Home → home.html
//! Galleries
//!     001 travel → gallery-travel.html
//!     002 city nights → gallery-city-nights.html
//! Contact → contact.html
//! Sitemap → sitemap.xml (5 entries)
//! Robots → robots.txt
//!
//! Generated 1 home page, 2 gallery pages, 1 contact page in public
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     Name: Ana Lima
//!     Base URL: https://analima.example
//! Galleries
//!     001 travel (2 images, 3 tags)
//!         Harbours, ferries and the sea in between.
//! Contact
//!     Ana Lima <hello@analima.example>
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::config::RenderConfig;
use crate::content::ContentDocument;
use crate::generate::{FileKind, GenerateReport, RenderedFile};
use crate::naming::display_title;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 image`, `2 images`.
fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 travel (2 images, 3 tags)
/// 002 studio
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ============================================================================
// Per-file progress
// ============================================================================

pub fn format_written(file: &RenderedFile) -> String {
    format!("Generated {}", file.filename)
}

/// Print the progress line for a file that was just written.
pub fn print_written(file: &RenderedFile) {
    println!("{}", format_written(file));
}

// ============================================================================
// Build summary
// ============================================================================

/// Format the end-of-run summary: every file by what it is, then totals.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let site = &report.site;
    let mut lines = Vec::new();
    let mut gallery_pos = 0;

    for file in &site.files {
        match file.kind {
            FileKind::Gallery => {
                gallery_pos += 1;
                if gallery_pos == 1 {
                    lines.push("Galleries".to_string());
                }
                let header = entity_header(gallery_pos, &display_title(&file.label), None);
                lines.push(format!("{}{} \u{2192} {}", indent(1), header, file.filename));
            }
            FileKind::Sitemap => {
                // Root entry plus one per page.
                let entries = 1 + site.files.iter().filter(|f| f.kind.is_page()).count();
                lines.push(format!(
                    "{} \u{2192} {} ({} {})",
                    file.label,
                    file.filename,
                    entries,
                    if entries == 1 { "entry" } else { "entries" }
                ));
            }
            _ => lines.push(format!("{} \u{2192} {}", file.label, file.filename)),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {} in {}",
        count_noun(site.count(FileKind::Home), "home page"),
        count_noun(site.count(FileKind::Gallery), "gallery page"),
        count_noun(site.count(FileKind::Contact), "contact page"),
        report.output_dir.display()
    ));

    lines
}

/// Print the build summary to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format an inventory of the content document as the renderer will see it.
pub fn format_check_output(doc: &ContentDocument, config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(format!("{}Name: {}", indent(1), config.page_name(doc)));
    lines.push(format!(
        "{}Base URL: {}",
        indent(1),
        config.resolve_base_url(doc)
    ));

    if let Some(hero) = &doc.hero {
        lines.push("Hero".to_string());
        lines.push(format!("{}{}", indent(1), hero.title));
        if !hero.subtitle.is_empty() {
            lines.push(format!("{}{}", indent(1), hero.subtitle));
        }
    }

    lines.push("Galleries".to_string());
    if doc.galleries.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, (slug, gallery)) in doc.galleries.iter().enumerate() {
        let detail = format!(
            "{}, {}",
            count_noun(gallery.images.len(), "image"),
            count_noun(gallery.tags.len(), "tag")
        );
        lines.push(format!(
            "{}{}",
            indent(1),
            entity_header(i + 1, &display_title(slug), Some(&detail))
        ));
        let desc = truncate_desc(gallery.description.trim(), 60);
        if !desc.is_empty() {
            lines.push(format!("{}{}", indent(2), desc));
        }
    }

    if let Some(contact) = &doc.contact {
        lines.push("Contact".to_string());
        lines.push(format!("{}{} <{}>", indent(1), contact.name, contact.email));
        if let Some(phone) = contact.phone() {
            lines.push(format!("{}{}", indent(1), phone));
        }
    }

    lines
}

/// Print the check inventory to stdout.
pub fn print_check_output(doc: &ContentDocument, config: &RenderConfig) {
    for line in format_check_output(doc, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
