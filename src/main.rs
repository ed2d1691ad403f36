use clap::{Parser, Subcommand};
use folio_render::config::{self, Overrides, RenderConfig};
use folio_render::{content, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-render")]
#[command(about = "Render crawlable portfolio pages, sitemap and robots.txt from content.json")]
#[command(long_about = "\
Render crawlable portfolio pages, sitemap and robots.txt from content.json

Run with no arguments to read ./content.json and write into the current
directory:

  home.html                  # Hero text and links to every gallery
  gallery-<slug>.html        # One per gallery, in content.json order
  contact.html               # Only when content.json has a contact
  sitemap.xml                # Site root + every page above
  robots.txt                 # Allows all, points at the sitemap

With --dot-prefix the pages and sitemap are written as hidden files
(.home.html, .gallery-<slug>.html, .sitemap.xml) and the contact section
is embedded in the home page.

Base URL (first available wins):
  --base-url / BASE_URL / base_url in folio-render.toml
  baseUrl in content.json
  site.fallback_base_url (https://example.com)

Run 'folio-render gen-config' to generate a documented folio-render.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content document (default: content.json)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Base URL for sitemap and robots.txt; overrides baseUrl in the document
    #[arg(long, env = "BASE_URL", global = true)]
    base_url: Option<String>,

    /// Write dot-prefixed files and embed contact in the home page
    #[arg(long, global = true)]
    dot_prefix: bool,

    /// Directory holding an optional folio-render.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page, the sitemap and robots.txt (default)
    Build,
    /// Load and summarize the content document without writing anything
    Check,
    /// Print a stock folio-render.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let config = resolve_config(&cli)?;
            let report = generate::generate(&config)?;
            println!();
            output::print_generate_output(&report);
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            println!("==> Checking {}", config.content_path.display());
            let doc = content::load_content(&config.content_path)?;
            output::print_check_output(&doc, &config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Stock defaults, then `folio-render.toml`, then flags and `BASE_URL`.
fn resolve_config(cli: &Cli) -> Result<RenderConfig, config::ConfigError> {
    config::load_config(&cli.config)?.with_overrides(Overrides {
        content_path: cli.content.clone(),
        output_dir: cli.output.clone(),
        base_url: cli.base_url.clone(),
        dot_prefix: cli.dot_prefix,
    })
}
