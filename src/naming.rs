//! Output filename convention and slug display titles.
//!
//! Every generated file has a fixed name shape; the only variation is the
//! dot-prefix mode, which hides pages and the sitemap behind a leading `.`:
//!
//! | Output  | plain                 | dot-prefix             |
//! |---------|-----------------------|------------------------|
//! | home    | `home.html`           | `.home.html`           |
//! | gallery | `gallery-{slug}.html` | `.gallery-{slug}.html` |
//! | contact | `contact.html`        | (embedded in home)     |
//! | sitemap | `sitemap.xml`         | `.sitemap.xml`         |
//! | robots  | `robots.txt`          | `robots.txt`           |
//!
//! Slugs go into filenames verbatim. They are expected to be filesystem- and
//! URL-safe already; nothing here sanitizes them.
//!
//! ## Display Titles
//!
//! Dashes in a slug are converted to spaces for display:
//! - `city-nights` → "city nights"
//! - `travel` → "travel"

/// Which filename variant to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNaming {
    pub dot_prefix: bool,
}

impl FileNaming {
    pub fn new(dot_prefix: bool) -> Self {
        Self { dot_prefix }
    }

    fn prefixed(&self, name: String) -> String {
        if self.dot_prefix {
            format!(".{name}")
        } else {
            name
        }
    }

    pub fn home(&self) -> String {
        self.prefixed("home.html".to_string())
    }

    pub fn gallery(&self, slug: &str) -> String {
        self.prefixed(format!("gallery-{slug}.html"))
    }

    /// `None` in dot-prefix mode, where contact lives inside the home page.
    pub fn contact(&self) -> Option<String> {
        (!self.dot_prefix).then(|| "contact.html".to_string())
    }

    pub fn sitemap(&self) -> String {
        self.prefixed("sitemap.xml".to_string())
    }

    /// Crawlers only look for `/robots.txt`, so it is never prefixed.
    pub fn robots(&self) -> String {
        "robots.txt".to_string()
    }
}

/// Display title for a gallery slug: dashes become spaces.
pub fn display_title(slug: &str) -> String {
    slug.replace('-', " ")
}
