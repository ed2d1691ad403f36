//! The content document: everything the site says, in one JSON file.
//!
//! ```json
//! {
//!   "pageName": "Ana Lima",
//!   "baseUrl": "https://analima.photo",
//!   "hero": { "title": "Light & Water", "subtitle": "Coastal work 2019-2024" },
//!   "galleries": {
//!     "travel": { "description": "...", "tags": ["sea"], "images": ["a.jpg"] },
//!     "city-nights": { "images": ["b.jpg", "c.jpg"] }
//!   },
//!   "contact": { "name": "Ana Lima", "email": "ana@example.com", "phone": "+351 000" }
//! }
//! ```
//!
//! Every field is optional and may be `null`. Absent text renders as empty,
//! absent lists render as empty lists; only a missing file or malformed JSON
//! is an error.
//!
//! Gallery order is significant: it is the order of keys in the document, and
//! it drives home-page links, file write order, and sitemap order. Serde's
//! default maps would lose that, so [`Galleries`] deserializes the object into
//! an ordered list itself.

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("cannot read content file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub page_name: Option<String>,
    pub base_url: Option<String>,
    pub hero: Option<Hero>,
    #[serde(deserialize_with = "nullable")]
    pub galleries: Galleries,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hero {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Gallery {
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    /// Image URLs, used verbatim as `src`.
    #[serde(deserialize_with = "nullable")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    pub phone: Option<String>,
}

impl Contact {
    /// Phone number, if present and non-empty.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }
}

/// Galleries keyed by slug, in document order.
///
/// A slug that appears twice keeps its first position and takes the last
/// value, which is how JSON objects behave in the browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Galleries(Vec<(String, Gallery)>);

impl Galleries {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Gallery)> {
        self.0.iter().map(|(slug, g)| (slug.as_str(), g))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&Gallery> {
        self.0.iter().find(|(s, _)| s == slug).map(|(_, g)| g)
    }

    fn insert(&mut self, slug: String, gallery: Gallery) {
        match self.0.iter_mut().find(|(s, _)| *s == slug) {
            Some(entry) => entry.1 = gallery,
            None => self.0.push((slug, gallery)),
        }
    }
}

impl<'de> Deserialize<'de> for Galleries {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GalleriesVisitor;

        impl<'de> Visitor<'de> for GalleriesVisitor {
            type Value = Galleries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping gallery slugs to galleries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Galleries, A::Error> {
                let mut galleries = Galleries::default();
                while let Some((slug, gallery)) = map.next_entry::<String, Option<Gallery>>()? {
                    galleries.insert(slug, gallery.unwrap_or_default());
                }
                Ok(galleries)
            }
        }

        deserializer.deserialize_map(GalleriesVisitor)
    }
}

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a content document from a JSON string.
pub fn parse_content(json: &str) -> Result<ContentDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read and parse the content document at `path`.
pub fn load_content(path: &Path) -> Result<ContentDocument, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_content(&raw).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
