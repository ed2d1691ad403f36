//! Render configuration module.
//!
//! Everything the renderer needs to know that is not in `content.json` lives
//! in [`RenderConfig`]: where the content document is, where output goes, which
//! base URL to stamp into the sitemap, and which output variant to write. The
//! renderer never reads the environment or the working directory itself; the
//! binary resolves all of that once and passes the struct in.
//!
//! ## Layers
//!
//! Stock defaults are overridden by an optional `folio-render.toml`, which is
//! in turn overridden by command-line flags (and the `BASE_URL` environment
//! variable, which clap folds into `--base-url`):
//!
//! ```text
//! stock defaults  <  folio-render.toml  <  --flags / BASE_URL
//! ```
//!
//! The file has a tool-specific name so a portfolio repo's own `config.toml`
//! (Hugo, Netlify, ...) is never picked up.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_path = "content.json"  # Content document to render
//! output_dir = "."               # Where pages, sitemap and robots.txt go
//! dot_prefix = false             # Hidden-file variant, contact embedded in home
//! # base_url = "https://example.com"  # Overrides the document's baseUrl
//!
//! [site]
//! fallback_base_url = "https://example.com"  # Used when nothing else sets one
//! fallback_page_name = "My Portfolio"        # Used when pageName is absent
//! ```
//!
//! Unknown keys are rejected to catch typos early. Values are only checked
//! for presence; a base URL is used exactly as given, wherever it comes from.
//!
//! ## Base URL Precedence
//!
//! An explicit override (flag, `BASE_URL`, or `base_url` in the file) beats
//! the document's `baseUrl`, which beats `site.fallback_base_url`. Empty
//! values count as absent at every level. See [`RenderConfig::resolve_base_url`].

use crate::content::ContentDocument;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file looked up in the `--config` directory.
pub const CONFIG_FILE: &str = "folio-render.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Renderer configuration loaded from `folio-render.toml` and command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Path to the JSON content document.
    pub content_path: PathBuf,
    /// Directory the generated files are written to.
    pub output_dir: PathBuf,
    /// Explicit base URL. When set and non-empty, wins over the document's
    /// `baseUrl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Write dot-prefixed (hidden) files and embed contact in the home page
    /// instead of writing `contact.html`.
    pub dot_prefix: bool,
    /// Site-wide fallbacks for absent document fields.
    pub site: SiteDefaults,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from("content.json"),
            output_dir: PathBuf::from("."),
            base_url: None,
            dot_prefix: false,
            site: SiteDefaults::default(),
        }
    }
}

/// Fallback values used when the content document leaves a field out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    /// Base URL used when neither an override nor the document provides one.
    pub fallback_base_url: String,
    /// Heading shown on every page when `pageName` is absent.
    pub fallback_page_name: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            fallback_base_url: "https://example.com".to_string(),
            fallback_page_name: "My Portfolio".to_string(),
        }
    }
}

/// Command-line values layered on top of the file config.
///
/// `None` / `false` means "not given" and leaves the file value untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub content_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub dot_prefix: bool,
}

impl RenderConfig {
    /// Presence checks only: the content path must name something.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "content_path must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides and re-validate. An empty base URL (e.g.
    /// `BASE_URL=""`) is not an override.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(path) = overrides.content_path {
            self.content_path = path;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(url) = overrides.base_url.filter(|u| !u.is_empty()) {
            self.base_url = Some(url);
        }
        self.dot_prefix |= overrides.dot_prefix;
        self.validate()?;
        Ok(self)
    }

    /// Pick the base URL for a run, without a trailing slash.
    ///
    /// Override > document `baseUrl` > `site.fallback_base_url`. Empty strings
    /// count as absent.
    pub fn resolve_base_url(&self, doc: &ContentDocument) -> String {
        let chosen = self
            .base_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| doc.base_url.as_deref().filter(|u| !u.is_empty()))
            .unwrap_or(&self.site.fallback_base_url);
        chosen.trim_end_matches('/').to_string()
    }

    /// Site heading: the document's `pageName`, or the configured fallback.
    pub fn page_name<'a>(&'a self, doc: &'a ContentDocument) -> &'a str {
        doc.page_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.site.fallback_page_name)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(RenderConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load [`CONFIG_FILE`] from a directory as a raw TOML value, or `None` when
/// the directory has no such file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<RenderConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: RenderConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load [`CONFIG_FILE`] from the given directory on top of stock defaults.
/// A missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<RenderConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `folio-render.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-render Configuration (folio-render.toml)
# =============================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags override this file; BASE_URL in the environment
# behaves exactly like --base-url.
# Unknown keys will cause an error.

# JSON content document to render.
content_path = "content.json"

# Directory that receives the pages, sitemap and robots.txt.
output_dir = "."

# Write .home.html, .gallery-<slug>.html and .sitemap.xml, and embed the
# contact section in the home page instead of writing contact.html.
dot_prefix = false

# Base URL for sitemap and robots.txt, used as given. When set it
# overrides the document's baseUrl field.
# base_url = "https://example.com"

# ---------------------------------------------------------------------------
# Fallbacks for fields the content document leaves out
# ---------------------------------------------------------------------------
[site]
# Used when no override is given and the document has no baseUrl.
fallback_base_url = "https://example.com"

# Page heading when the document has no pageName.
fallback_page_name = "My Portfolio"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc_with_base(url: Option<&str>) -> ContentDocument {
        ContentDocument {
            base_url: url.map(str::to_string),
            ..ContentDocument::default()
        }
    }

    #[test]
    fn default_config_values() {
        let config = RenderConfig::default();
        assert_eq!(config.content_path, PathBuf::from("content.json"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.base_url, None);
        assert!(!config.dot_prefix);
        assert_eq!(config.site.fallback_base_url, "https://example.com");
        assert_eq!(config.site.fallback_page_name, "My Portfolio");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
dot_prefix = true

[site]
fallback_page_name = "Studio"
"#;
        let config: RenderConfig = toml::from_str(toml).unwrap();
        assert!(config.dot_prefix);
        assert_eq!(config.site.fallback_page_name, "Studio");
        // Defaults preserved
        assert_eq!(config.site.fallback_base_url, "https://example.com");
        assert_eq!(config.content_path, PathBuf::from("content.json"));
    }

    // =========================================================================
    // Base URL precedence
    // =========================================================================

    #[test]
    fn override_beats_document_base_url() {
        let config = RenderConfig {
            base_url: Some("https://foo.test".into()),
            ..RenderConfig::default()
        };
        let doc = doc_with_base(Some("https://doc.test"));
        assert_eq!(config.resolve_base_url(&doc), "https://foo.test");
    }

    #[test]
    fn override_used_when_document_lacks_base_url() {
        let config = RenderConfig {
            base_url: Some("https://foo.test".into()),
            ..RenderConfig::default()
        };
        assert_eq!(
            config.resolve_base_url(&doc_with_base(None)),
            "https://foo.test"
        );
    }

    #[test]
    fn document_base_url_used_without_override() {
        let config = RenderConfig::default();
        let doc = doc_with_base(Some("https://doc.test"));
        assert_eq!(config.resolve_base_url(&doc), "https://doc.test");
    }

    #[test]
    fn fallback_base_url_when_nothing_set() {
        let config = RenderConfig::default();
        assert_eq!(
            config.resolve_base_url(&doc_with_base(None)),
            "https://example.com"
        );
    }

    #[test]
    fn empty_document_base_url_counts_as_absent() {
        let config = RenderConfig::default();
        assert_eq!(
            config.resolve_base_url(&doc_with_base(Some(""))),
            "https://example.com"
        );
    }

    #[test]
    fn base_url_trailing_slashes_trimmed() {
        let config = RenderConfig::default();
        let doc = doc_with_base(Some("https://doc.test//"));
        assert_eq!(config.resolve_base_url(&doc), "https://doc.test");
    }

    #[test]
    fn base_url_used_as_given() {
        let config = RenderConfig {
            base_url: Some("HTTPS://Foo.test".into()),
            ..RenderConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve_base_url(&doc_with_base(None)), "HTTPS://Foo.test");
    }

    #[test]
    fn page_name_falls_back() {
        let config = RenderConfig::default();
        let mut doc = ContentDocument::default();
        assert_eq!(config.page_name(&doc), "My Portfolio");
        doc.page_name = Some("Ana".into());
        assert_eq!(config.page_name(&doc), "Ana");
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn overrides_replace_file_values() {
        let config = RenderConfig::default()
            .with_overrides(Overrides {
                content_path: Some("site/content.json".into()),
                output_dir: Some("public".into()),
                base_url: Some("https://foo.test".into()),
                dot_prefix: true,
            })
            .unwrap();
        assert_eq!(config.content_path, PathBuf::from("site/content.json"));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.base_url.as_deref(), Some("https://foo.test"));
        assert!(config.dot_prefix);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let file = RenderConfig {
            dot_prefix: true,
            base_url: Some("https://file.test".into()),
            ..RenderConfig::default()
        };
        let config = file.clone().with_overrides(Overrides::default()).unwrap();
        assert_eq!(config, file);
    }

    #[test]
    fn empty_base_url_override_is_not_an_override() {
        let config = RenderConfig::default()
            .with_overrides(Overrides {
                base_url: Some(String::new()),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(config.base_url, None);
        let doc = doc_with_base(Some("https://doc.test"));
        assert_eq!(config.resolve_base_url(&doc), "https://doc.test");
    }

    #[test]
    fn empty_content_path_override_is_rejected() {
        let result = RenderConfig::default().with_overrides(Overrides {
            content_path: Some(PathBuf::new()),
            ..Overrides::default()
        });
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn misspelled_dot_prefix_rejected() {
        let result: Result<RenderConfig, _> = toml::from_str("dot_prefx = true\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_site_key_rejected() {
        let toml_str = r#"
[site]
page_name = "x"
"#;
        let result: Result<RenderConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // merge / load / resolve
    // =========================================================================

    #[test]
    fn file_dot_prefix_overrides_stock_default() {
        let overlay: toml::Value = toml::from_str("dot_prefix = true").unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        assert_eq!(merged.get("dot_prefix").unwrap().as_bool(), Some(true));
        assert_eq!(
            merged.get("content_path").unwrap().as_str(),
            Some("content.json")
        );
    }

    #[test]
    fn file_fallback_page_name_keeps_fallback_base_url() {
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
fallback_page_name = "Studio"
"#,
        )
        .unwrap();
        let merged = merge_toml(stock_defaults_value(), overlay);
        let site = merged.get("site").unwrap();
        assert_eq!(
            site.get("fallback_page_name").unwrap().as_str(),
            Some("Studio")
        );
        assert_eq!(
            site.get("fallback_base_url").unwrap().as_str(),
            Some("https://example.com")
        );
    }

    #[test]
    fn project_without_config_file_gets_defaults() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
        assert_eq!(load_config(tmp.path()).unwrap(), RenderConfig::default());
    }

    #[test]
    fn foreign_config_toml_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "baseURL = \"https://x.test\"\n",
        )
        .unwrap();
        assert_eq!(load_config(tmp.path()).unwrap(), RenderConfig::default());
    }

    #[test]
    fn project_config_file_sets_output_and_base_url() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
output_dir = "public"
base_url = "https://file.test"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.base_url.as_deref(), Some("https://file.test"));
        assert_eq!(config.content_path, PathBuf::from("content.json"));
    }

    #[test]
    fn malformed_config_file_is_toml_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn config_file_with_empty_content_path_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "content_path = \"\"\n").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_defaults_value_omits_unset_base_url() {
        let val = stock_defaults_value();
        assert!(val.is_table());
        assert!(val.get("base_url").is_none());
        assert!(val.get("site").is_some());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: RenderConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_keys() {
        let content = stock_config_toml();
        assert!(content.contains("content_path"));
        assert!(content.contains("output_dir"));
        assert!(content.contains("dot_prefix"));
        assert!(content.contains("base_url"));
        assert!(content.contains("[site]"));
    }
}
